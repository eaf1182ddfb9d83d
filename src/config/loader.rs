//! Project config discovery and loading.

use std::fs;
use std::path::Path;

use crate::error::{Result, SiteStampError};

use super::schema::ProjectConfig;

/// File name of the project config, at the project root.
pub const PROJECT_CONFIG_FILE: &str = "sitestamp.yml";

/// Load the project config.
///
/// Reads `explicit` when given (it must exist), otherwise
/// `<project_root>/sitestamp.yml` if present. No file means defaults.
pub fn load_project_config(project_root: &Path, explicit: Option<&Path>) -> Result<ProjectConfig> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let discovered = project_root.join(PROJECT_CONFIG_FILE);
            if !discovered.exists() {
                tracing::debug!("No {} in {}", PROJECT_CONFIG_FILE, project_root.display());
                return Ok(ProjectConfig::default());
            }
            discovered
        }
    };

    let content = fs::read_to_string(&path)?;
    parse_project_config(&content, &path)
}

/// Parse YAML content into a [`ProjectConfig`].
pub fn parse_project_config(content: &str, source_path: &Path) -> Result<ProjectConfig> {
    if content.trim().is_empty() {
        return Ok(ProjectConfig::default());
    }
    serde_yaml::from_str(content).map_err(|e| SiteStampError::ProjectConfigParse {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}
