//! URLs derived from a detected environment.
//!
//! In path routing the environment lives in the URL path, so links between
//! apps and the manifest location must carry it. In subdomain routing the
//! host already carries it and paths stay environment-free.

use super::detection::{DetectedEnvironment, RoutingMode};

/// Manifest file name served at the root of each environment.
pub const MANIFEST_FILE: &str = "manifest.json";

/// Rewritten navigation target for `app`, if the link needs rewriting.
///
/// Returns `Some("/<env>/<app>")` in path routing with a known environment;
/// `None` means the link is left untouched.
///
/// ```
/// use sitestamp::environment::{detect, nav_href};
///
/// let detected = detect("example.cloudfront.net", "/staging/app2");
/// assert_eq!(nav_href(&detected, "app1").as_deref(), Some("/staging/app1"));
///
/// let detected = detect("staging.example.com", "/app2");
/// assert_eq!(nav_href(&detected, "app1"), None);
/// ```
pub fn nav_href(detected: &DetectedEnvironment, app: &str) -> Option<String> {
    if detected.routing_mode == RoutingMode::Path && !detected.is_unknown() {
        Some(format!("/{}/{}", detected.env, app))
    } else {
        None
    }
}

/// Path of the ecosystem manifest for a detected environment.
pub fn manifest_path(detected: &DetectedEnvironment) -> String {
    match detected.routing_mode {
        RoutingMode::Path => format!("/{}/{}", detected.env, MANIFEST_FILE),
        RoutingMode::Subdomain => format!("/{}", MANIFEST_FILE),
    }
}
