//! Verify command implementation.
//!
//! The `sitestamp verify` command fails when any placeholder survived in
//! the output directory.

use std::path::{Path, PathBuf};

use crate::build::verify_output;
use crate::cli::args::VerifyArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve::resolve_dir;

/// The verify command implementation.
pub struct VerifyCommand {
    project_root: PathBuf,
    config: ProjectConfig,
    args: VerifyArgs,
}

impl VerifyCommand {
    /// Create a new verify command.
    pub fn new(project_root: &Path, config: ProjectConfig, args: VerifyArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Output directory being checked.
    pub fn output_dir(&self) -> PathBuf {
        resolve_dir(
            &self.project_root,
            self.args.out.as_deref(),
            self.config.output_dir(&self.project_root),
        )
    }
}

impl Command for VerifyCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let output_dir = self.output_dir();
        let leftovers = verify_output(&output_dir)?;

        if leftovers.is_empty() {
            ui.success(&format!("No placeholders left in {}", output_dir.display()));
            return Ok(CommandResult::success());
        }

        for leftover in &leftovers {
            ui.error(&format!(
                "{}: {}",
                leftover.path.display(),
                leftover.placeholder
            ));
        }
        ui.message(&format!("{} placeholder(s) left unreplaced", leftovers.len()));

        Ok(CommandResult::failure(1))
    }
}
