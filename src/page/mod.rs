//! Page adapter.
//!
//! The only stateful part of environment detection: applying a
//! [`DetectedEnvironment`] to a rendered page. Everything a page can be
//! asked to do goes through [`PageSurface`], so the detection logic stays
//! a pure function and the page can be a browser DOM, a terminal, or a
//! test double.
//!
//! [`load_page`] runs the page-load sequence:
//!
//! 1. Detect the environment from the page location
//! 2. Fill in env, host, route, ref, sha, time and the config region
//! 3. Rewrite nav links in path routing
//! 4. Fetch the ecosystem manifest and render it, or the fallback notice

pub mod mock;
pub mod terminal;

pub use mock::MockPage;
pub use terminal::UiPage;

use std::fmt;

use crate::build::BuildContext;
use crate::environment::{manifest_path, nav_href, DetectedEnvironment, PageLocation};
use crate::manifest::{EcosystemView, ManifestSource, ManifestSummary};

/// Text fields a page displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PageField {
    /// Detected environment name.
    Env,
    /// Page hostname.
    Host,
    /// Page path.
    Route,
    /// Build ref.
    Ref,
    /// Build commit SHA.
    Sha,
    /// Build timestamp.
    Time,
}

impl PageField {
    /// Element id of the field.
    pub fn id(&self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Host => "host",
            Self::Route => "route",
            Self::Ref => "ref",
            Self::Sha => "sha",
            Self::Time => "time",
        }
    }
}

impl fmt::Display for PageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// The mutations a page load performs.
pub trait PageSurface {
    /// Set the text of a field.
    fn set_field(&mut self, field: PageField, text: &str);

    /// Target app ids of the page's nav links.
    fn nav_apps(&self) -> Vec<String>;

    /// Point the nav link for `app` at `href`.
    fn set_nav_href(&mut self, app: &str, href: &str);

    /// Show the environment config.
    fn set_config(&mut self, rendered: &str);

    /// Show the ecosystem manifest region.
    fn set_ecosystem(&mut self, view: &EcosystemView);
}

/// Build-time values baked into a page.
#[derive(Debug, Clone, PartialEq)]
pub struct PageStamp {
    /// Build ref.
    pub git_ref: String,
    /// Build commit SHA.
    pub sha: String,
    /// Build timestamp (ISO-8601).
    pub build_time: String,
    /// Raw environment config text.
    pub config: String,
}

impl PageStamp {
    /// The stamp a build with this context and config would produce.
    pub fn from_build(context: &BuildContext, config_text: &str) -> Self {
        Self {
            git_ref: context.git_ref.clone(),
            sha: context.sha.clone(),
            build_time: context.build_time_iso(),
            config: config_text.to_string(),
        }
    }
}

/// Pretty-print config text for display.
///
/// Text that does not parse as JSON is shown as-is with a warning.
pub fn render_config(text: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(text) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| text.to_string()),
        Err(e) => {
            tracing::warn!("Config is not valid JSON ({}), showing raw text", e);
            text.to_string()
        }
    }
}

/// Run the page-load sequence against `surface`.
///
/// Core fields are populated before the manifest is requested. A manifest
/// failure is logged and rendered as [`EcosystemView::Unavailable`]; it is
/// never returned.
pub fn load_page(
    surface: &mut dyn PageSurface,
    location: &PageLocation,
    stamp: &PageStamp,
    source: &dyn ManifestSource,
    current_app: Option<&str>,
) -> DetectedEnvironment {
    let detected = location.detect();
    tracing::debug!(
        "Detected env '{}' via {} routing",
        detected.env,
        detected.routing_mode
    );

    surface.set_field(PageField::Env, &detected.env);
    surface.set_field(PageField::Host, &location.hostname);
    surface.set_field(PageField::Route, &location.pathname);
    surface.set_field(PageField::Ref, &stamp.git_ref);
    surface.set_field(PageField::Sha, &stamp.sha);
    surface.set_field(PageField::Time, &stamp.build_time);
    surface.set_config(&render_config(&stamp.config));

    for app in surface.nav_apps() {
        if let Some(href) = nav_href(&detected, &app) {
            surface.set_nav_href(&app, &href);
        }
    }

    let url = location.url_for(&manifest_path(&detected));
    let view = match source.fetch(&url) {
        Ok(manifest) => EcosystemView::Loaded(ManifestSummary::from_manifest(&manifest, current_app)),
        Err(e) => {
            tracing::warn!("Failed to load ecosystem manifest: {}", e);
            EcosystemView::Unavailable
        }
    };
    surface.set_ecosystem(&view);

    detected
}
