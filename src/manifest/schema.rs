//! Ecosystem manifest schema.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A manifest describing every app deployed together in one environment.
///
/// Published by the deployment pipeline; unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EcosystemManifest {
    /// Environment the manifest describes.
    #[serde(default)]
    pub environment: Option<String>,

    /// Lifecycle of the environment (e.g. "permanent", "ephemeral").
    #[serde(default)]
    pub lifecycle: Option<String>,

    /// When the environment was last deployed.
    #[serde(default)]
    pub deployed_at: Option<String>,

    /// Where the environment's shared config is published.
    #[serde(default)]
    pub config_url: Option<String>,

    /// Deployed apps keyed by name.
    #[serde(default)]
    pub apps: BTreeMap<String, AppEntry>,
}

/// A single deployed app.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppEntry {
    /// Git ref the app was deployed from.
    #[serde(rename = "ref", default)]
    pub git_ref: Option<String>,
}
