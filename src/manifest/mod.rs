//! Ecosystem manifests.
//!
//! Every environment publishes a JSON manifest listing the apps deployed
//! into it. Pages fetch it once, best-effort, to show their siblings.
//!
//! - [`schema`] - Wire format
//! - [`fetch`] - HTTP loading
//! - [`summary`] - Display-ready views

pub mod fetch;
pub mod schema;
pub mod summary;

pub use fetch::{HttpManifestSource, ManifestSource};
pub use schema::{AppEntry, EcosystemManifest};
pub use summary::{AppLine, EcosystemView, ManifestSummary};
