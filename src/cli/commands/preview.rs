//! Preview command implementation.
//!
//! The `sitestamp preview` command runs the page-load sequence for a URL
//! against the terminal, with the build context and config a build would
//! use, and fetches the ecosystem manifest over HTTP.

use std::path::{Path, PathBuf};

use crate::build::EnvConfig;
use crate::cli::args::PreviewArgs;
use crate::config::ProjectConfig;
use crate::environment::PageLocation;
use crate::error::Result;
use crate::manifest::{HttpManifestSource, ManifestSource};
use crate::page::{load_page, PageStamp, UiPage};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve::{pick_list, resolve_context, resolve_dir};

/// The preview command implementation.
pub struct PreviewCommand {
    project_root: PathBuf,
    config: ProjectConfig,
    args: PreviewArgs,
}

impl PreviewCommand {
    /// Create a new preview command.
    pub fn new(project_root: &Path, config: ProjectConfig, args: PreviewArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config,
            args,
        }
    }

    /// Run the preview with a given manifest source.
    pub fn run(
        &self,
        ui: &mut dyn UserInterface,
        source: &dyn ManifestSource,
    ) -> Result<CommandResult> {
        let location = PageLocation::parse(&self.args.url)?;
        let context = resolve_context(&self.args.context);
        let config_dir = resolve_dir(
            &self.project_root,
            self.args.config_dir.as_deref(),
            self.config.config_dir(&self.project_root),
        );
        let env_config = EnvConfig::load(&config_dir, &context.env)?;

        let nav = pick_list(&self.args.nav, &self.config.nav);
        let app = self
            .args
            .app
            .as_deref()
            .or(self.config.app_name.as_deref());

        ui.show_header(&format!("Preview {}", self.args.url));
        if env_config.fallback {
            ui.warning(&format!(
                "No config found at {}, using {{}}",
                env_config.path.display()
            ));
        }

        let stamp = PageStamp::from_build(&context, &env_config.text);
        let mut page = UiPage::new(ui, &nav);
        load_page(&mut page, &location, &stamp, source, app);
        page.show_nav();

        Ok(CommandResult::success())
    }
}

impl Command for PreviewCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = HttpManifestSource::new()?;
        self.run(ui, &source)
    }
}
