//! Per-environment configuration blobs.
//!
//! Each deployment environment has a JSON file under the config directory.
//! All sandbox environments share `sandbox.json`. The file is never parsed
//! here; its text is spliced verbatim into the build output.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::environment::SANDBOX_PREFIX;
use crate::error::{Result, SiteStampError};

/// Config file base name used for every sandbox environment.
pub const SANDBOX_CONFIG: &str = "sandbox";

/// Text used when an environment has no config file.
pub const EMPTY_CONFIG: &str = "{}";

/// Config file base name for an environment.
///
/// # Example
///
/// ```
/// use sitestamp::build::config_name_for;
///
/// assert_eq!(config_name_for("sandbox-pr-123"), "sandbox");
/// assert_eq!(config_name_for("staging"), "staging");
/// ```
pub fn config_name_for(env: &str) -> &str {
    if env.starts_with(SANDBOX_PREFIX) {
        SANDBOX_CONFIG
    } else {
        env
    }
}

/// A loaded environment config.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvConfig {
    /// Config base name (e.g. "sandbox").
    pub name: String,
    /// Path the config was looked up at.
    pub path: PathBuf,
    /// Raw file text, or `{}` when the file was missing.
    pub text: String,
    /// True when the file was missing and `{}` was substituted.
    pub fallback: bool,
}

impl EnvConfig {
    /// Load the config for `env` from `config_dir`.
    ///
    /// A missing file is recoverable and yields `{}` with a warning.
    /// Any other read failure is fatal.
    pub fn load(config_dir: &Path, env: &str) -> Result<Self> {
        let name = config_name_for(env).to_string();
        let path = config_dir.join(format!("{}.json", name));

        match fs::read_to_string(&path) {
            Ok(text) => {
                tracing::debug!("Loaded environment config {}", path.display());
                Ok(Self {
                    name,
                    path,
                    text,
                    fallback: false,
                })
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(
                    "Config file not found: {}, using empty config",
                    path.display()
                );
                Ok(Self {
                    name,
                    path,
                    text: EMPTY_CONFIG.to_string(),
                    fallback: true,
                })
            }
            Err(source) => Err(SiteStampError::ConfigRead { path, source }),
        }
    }
}
