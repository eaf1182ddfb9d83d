//! Build command implementation.
//!
//! The `sitestamp build` command stamps every source file into the output
//! directory.

use std::path::{Path, PathBuf};

use crate::build::{build, BuildPaths, BuildReport};
use crate::cli::args::BuildArgs;
use crate::config::ProjectConfig;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve::{resolve_context, resolve_dir};

/// The build command implementation.
pub struct BuildCommand {
    project_root: PathBuf,
    config: ProjectConfig,
    args: BuildArgs,
}

impl BuildCommand {
    /// Create a new build command.
    pub fn new(project_root: &Path, config: ProjectConfig, args: BuildArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Directories this build reads and writes.
    pub fn paths(&self) -> BuildPaths {
        let root = &self.project_root;
        BuildPaths {
            source_dir: resolve_dir(
                root,
                self.args.source.as_deref(),
                self.config.source_dir(root),
            ),
            config_dir: resolve_dir(
                root,
                self.args.config_dir.as_deref(),
                self.config.config_dir(root),
            ),
            output_dir: resolve_dir(root, self.args.out.as_deref(), self.config.output_dir(root)),
        }
    }

    fn report(&self, report: &BuildReport, ui: &mut dyn UserInterface) {
        if report.config.fallback {
            ui.warning(&format!(
                "No config found at {}, using {{}}",
                report.config.path.display()
            ));
        }

        ui.success(&format!(
            "Built {} files to {}",
            report.files.len(),
            report.output_dir.display()
        ));

        if ui.output_mode().shows_details() {
            for file in &report.files {
                ui.message(&format!(
                    "  {} ({} replaced)",
                    file.path.display(),
                    file.replaced
                ));
            }
        }

        ui.key_value("ref", &report.context.git_ref);
        ui.key_value("sha", &report.context.sha);
        ui.key_value("env", &report.context.env);
        ui.key_value("time", &report.context.build_time_iso());
        ui.key_value("config", &report.config.name);
    }
}

impl Command for BuildCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let paths = self.paths();
        let context = resolve_context(&self.args.context);

        tracing::debug!(
            "Building {} -> {} for env '{}'",
            paths.source_dir.display(),
            paths.output_dir.display(),
            context.env
        );

        let report = build(&paths, &context)?;
        self.report(&report, ui);

        Ok(CommandResult::success())
    }
}
