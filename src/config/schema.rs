//! Project config schema.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default source directory, relative to the project root.
pub const DEFAULT_SOURCE_DIR: &str = "src";
/// Default environment config directory, relative to the project root.
pub const DEFAULT_CONFIG_DIR: &str = "config";
/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";

/// Contents of `sitestamp.yml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory of source files to stamp.
    #[serde(default)]
    pub source_dir: Option<PathBuf>,

    /// Directory holding per-environment JSON configs.
    #[serde(default)]
    pub config_dir: Option<PathBuf>,

    /// Directory receiving stamped files.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,

    /// Name of this app within the deployment (e.g. "app2").
    #[serde(default)]
    pub app_name: Option<String>,

    /// App ids the page links to.
    #[serde(default)]
    pub nav: Vec<String>,
}

impl ProjectConfig {
    /// Resolved source directory.
    pub fn source_dir(&self, project_root: &Path) -> PathBuf {
        resolve(project_root, self.source_dir.as_deref(), DEFAULT_SOURCE_DIR)
    }

    /// Resolved environment config directory.
    pub fn config_dir(&self, project_root: &Path) -> PathBuf {
        resolve(project_root, self.config_dir.as_deref(), DEFAULT_CONFIG_DIR)
    }

    /// Resolved output directory.
    pub fn output_dir(&self, project_root: &Path) -> PathBuf {
        resolve(project_root, self.output_dir.as_deref(), DEFAULT_OUTPUT_DIR)
    }
}

fn resolve(project_root: &Path, configured: Option<&Path>, default: &str) -> PathBuf {
    project_root.join(configured.unwrap_or_else(|| Path::new(default)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_relative_to_root() {
        let config = ProjectConfig::default();
        let root = Path::new("/site");
        assert_eq!(config.source_dir(root), PathBuf::from("/site/src"));
        assert_eq!(config.config_dir(root), PathBuf::from("/site/config"));
        assert_eq!(config.output_dir(root), PathBuf::from("/site/dist"));
    }

    #[test]
    fn absolute_paths_are_kept() {
        let config = ProjectConfig {
            output_dir: Some(PathBuf::from("/var/www/app2")),
            ..Default::default()
        };
        assert_eq!(
            config.output_dir(Path::new("/site")),
            PathBuf::from("/var/www/app2")
        );
    }
}
