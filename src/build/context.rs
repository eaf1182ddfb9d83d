//! Build context resolution.
//!
//! The values stamped into a build come from the process environment
//! once, up front, and travel through the build as a plain struct.

use chrono::{DateTime, SecondsFormat, Utc};

/// Environment variable carrying the git ref being built.
pub const REF_VAR: &str = "APP_REF";
/// Environment variable carrying the commit SHA being built.
pub const SHA_VAR: &str = "APP_SHA";
/// Environment variable naming the target deployment environment.
pub const ENV_VAR: &str = "APP_ENV";

/// Fallback for `APP_REF` and `APP_SHA`.
pub const DEFAULT_REVISION: &str = "local";
/// Fallback for `APP_ENV`.
pub const DEFAULT_ENV: &str = "dev";

/// Values substituted into a build.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildContext {
    /// Git ref (branch or tag) the build was produced from.
    pub git_ref: String,
    /// Commit SHA the build was produced from.
    pub sha: String,
    /// Instant the build started.
    pub build_time: DateTime<Utc>,
    /// Deployment environment name (e.g. "dev", "sandbox-pr-123").
    pub env: String,
}

impl BuildContext {
    /// Resolve the context from the process environment, stamped now.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key), Utc::now())
    }

    /// Resolve with a custom env var lookup (for testing).
    ///
    /// Unset and empty variables both fall back to their defaults.
    pub fn from_lookup<F>(lookup: F, build_time: DateTime<Utc>) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        let var_or = |key: &str, default: &str| {
            lookup(key)
                .ok()
                .filter(|value| !value.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            git_ref: var_or(REF_VAR, DEFAULT_REVISION),
            sha: var_or(SHA_VAR, DEFAULT_REVISION),
            build_time,
            env: var_or(ENV_VAR, DEFAULT_ENV),
        }
    }

    /// Override the git ref.
    pub fn with_ref(mut self, git_ref: impl Into<String>) -> Self {
        self.git_ref = git_ref.into();
        self
    }

    /// Override the commit SHA.
    pub fn with_sha(mut self, sha: impl Into<String>) -> Self {
        self.sha = sha.into();
        self
    }

    /// Override the environment name.
    pub fn with_env(mut self, env: impl Into<String>) -> Self {
        self.env = env.into();
        self
    }

    /// Build time as an ISO-8601 UTC string with millisecond precision.
    pub fn build_time_iso(&self) -> String {
        self.build_time.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}
