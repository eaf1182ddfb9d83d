//! Deployment environment detection.
//!
//! Works out which deployment environment a page belongs to from its
//! hostname and URL path. Checked in order, first match wins:
//!
//! 1. First path segment names an environment (path routing)
//! 2. Leading hostname label names an environment (subdomain routing)
//! 3. Loopback host (`local`)
//! 4. Otherwise `unknown`

use std::fmt;

use serde::Serialize;

/// Environment names recognized without a prefix.
const NAMED_ENVIRONMENTS: [&str; 3] = ["prod", "dev", "staging"];

/// Prefix of ephemeral, PR-scoped environments.
pub const SANDBOX_PREFIX: &str = "sandbox-";

/// Environment reported for loopback hosts.
pub const LOCAL_ENV: &str = "local";

/// Environment reported when nothing matches.
pub const UNKNOWN_ENV: &str = "unknown";

/// Where the environment name is encoded in the page URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RoutingMode {
    /// First path segment, e.g. `/staging/app2`.
    Path,
    /// Leading hostname label, e.g. `staging.example.com`.
    #[default]
    Subdomain,
}

impl RoutingMode {
    /// Lowercase name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Path => "path",
            Self::Subdomain => "subdomain",
        }
    }
}

impl fmt::Display for RoutingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of environment detection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectedEnvironment {
    /// The environment name (e.g. "prod", "sandbox-pr-123", "local").
    pub env: String,
    /// How the environment was encoded in the URL.
    pub routing_mode: RoutingMode,
}

impl DetectedEnvironment {
    /// True when no rule matched.
    pub fn is_unknown(&self) -> bool {
        self.env == UNKNOWN_ENV
    }
}

/// True if `name` is a deployment environment name.
///
/// ```
/// use sitestamp::environment::is_deployment_env;
///
/// assert!(is_deployment_env("staging"));
/// assert!(is_deployment_env("sandbox-pr-42"));
/// assert!(!is_deployment_env("app2"));
/// ```
pub fn is_deployment_env(name: &str) -> bool {
    NAMED_ENVIRONMENTS.contains(&name) || name.starts_with(SANDBOX_PREFIX)
}

/// Non-empty segments of a URL path.
pub fn path_segments(pathname: &str) -> Vec<&str> {
    pathname.split('/').filter(|s| !s.is_empty()).collect()
}

/// Detect the deployment environment for a page.
///
/// Pure function of its inputs. A path segment naming an environment always
/// wins over the hostname, even when both name different environments.
///
/// # Example
///
/// ```
/// use sitestamp::environment::{detect, RoutingMode};
///
/// let detected = detect("example.cloudfront.net", "/staging/app2");
/// assert_eq!(detected.env, "staging");
/// assert_eq!(detected.routing_mode, RoutingMode::Path);
/// ```
pub fn detect(hostname: &str, pathname: &str) -> DetectedEnvironment {
    let first_segment = path_segments(pathname).first().copied().unwrap_or("");
    if is_deployment_env(first_segment) {
        return DetectedEnvironment {
            env: first_segment.to_string(),
            routing_mode: RoutingMode::Path,
        };
    }

    let subdomain = hostname.split('.').next().unwrap_or(hostname);
    if is_deployment_env(subdomain) {
        return DetectedEnvironment {
            env: subdomain.to_string(),
            routing_mode: RoutingMode::Subdomain,
        };
    }

    let env = if hostname == "localhost" || hostname == "127.0.0.1" {
        LOCAL_ENV
    } else {
        UNKNOWN_ENV
    };

    DetectedEnvironment {
        env: env.to_string(),
        routing_mode: RoutingMode::Subdomain,
    }
}
