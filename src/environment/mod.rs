//! Deployment environment detection and page routing.
//!
//! A page learns which environment it belongs to from its own URL. The
//! priority chain is:
//!
//! 1. First path segment (`/staging/app2`)
//! 2. Leading hostname label (`staging.example.com`)
//! 3. Loopback host (`local`)
//! 4. Fallback to "unknown"
//!
//! [`detect`] is pure; [`routing`] derives the URLs a page needs from its
//! result.

pub mod detection;
pub mod location;
pub mod routing;

pub use detection::{
    detect, is_deployment_env, path_segments, DetectedEnvironment, RoutingMode, LOCAL_ENV,
    SANDBOX_PREFIX, UNKNOWN_ENV,
};
pub use location::PageLocation;
pub use routing::{manifest_path, nav_href};
