//! Manifest rendering.

use super::schema::EcosystemManifest;

/// Placeholder shown for fields a manifest leaves out.
const MISSING: &str = "-";

/// One sibling app in a manifest summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppLine {
    /// App name.
    pub name: String,
    /// Deployed ref, or `-` when the manifest omits it.
    pub git_ref: String,
    /// True for the app rendering the summary.
    pub current: bool,
}

impl AppLine {
    /// Display text, e.g. `app2 (main) (current)`.
    pub fn render(&self) -> String {
        let mut line = format!("{} ({})", self.name, self.git_ref);
        if self.current {
            line.push_str(" (current)");
        }
        line
    }
}

/// Display-ready view of an ecosystem manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSummary {
    /// Environment lifecycle.
    pub lifecycle: String,
    /// Deployment timestamp.
    pub deployed_at: String,
    /// Link to the environment config.
    pub config_url: String,
    /// Sibling apps, sorted by name.
    pub apps: Vec<AppLine>,
}

impl ManifestSummary {
    /// Summarize a manifest from the point of view of `current_app`.
    pub fn from_manifest(manifest: &EcosystemManifest, current_app: Option<&str>) -> Self {
        let field = |value: &Option<String>| value.clone().unwrap_or_else(|| MISSING.to_string());

        let apps = manifest
            .apps
            .iter()
            .map(|(name, entry)| AppLine {
                name: name.clone(),
                git_ref: field(&entry.git_ref),
                current: current_app == Some(name.as_str()),
            })
            .collect();

        Self {
            lifecycle: field(&manifest.lifecycle),
            deployed_at: field(&manifest.deployed_at),
            config_url: field(&manifest.config_url),
            apps,
        }
    }

    /// Summary as display lines.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![
            format!("Lifecycle: {}", self.lifecycle),
            format!("Deployed: {}", self.deployed_at),
            format!("Config: {}", self.config_url),
            "Apps:".to_string(),
        ];
        lines.extend(self.apps.iter().map(|app| format!("  {}", app.render())));
        lines
    }
}

/// What the ecosystem region of a page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EcosystemView {
    /// Manifest loaded and summarized.
    Loaded(ManifestSummary),
    /// Manifest could not be loaded.
    Unavailable,
}

impl EcosystemView {
    /// Notice shown when the manifest could not be loaded.
    pub const UNAVAILABLE_NOTICE: &'static str = "Ecosystem manifest unavailable";

    /// Display lines for this view.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Loaded(summary) => summary.lines(),
            Self::Unavailable => vec![Self::UNAVAILABLE_NOTICE.to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::AppEntry;
    use std::collections::BTreeMap;

    fn manifest() -> EcosystemManifest {
        let mut apps = BTreeMap::new();
        apps.insert(
            "app2".to_string(),
            AppEntry {
                git_ref: Some("feature/x".to_string()),
            },
        );
        apps.insert(
            "app1".to_string(),
            AppEntry {
                git_ref: Some("main".to_string()),
            },
        );
        EcosystemManifest {
            environment: Some("sandbox-pr-12".to_string()),
            lifecycle: Some("ephemeral".to_string()),
            deployed_at: Some("2026-10-16T08:30:00Z".to_string()),
            config_url: Some("https://cfg.example.com/sandbox.json".to_string()),
            apps,
        }
    }

    #[test]
    fn summary_lists_apps_sorted_and_marks_current() {
        let summary = ManifestSummary::from_manifest(&manifest(), Some("app2"));

        assert_eq!(summary.apps.len(), 2);
        assert_eq!(summary.apps[0].name, "app1");
        assert!(!summary.apps[0].current);
        assert_eq!(summary.apps[1].name, "app2");
        assert!(summary.apps[1].current);
    }

    #[test]
    fn summary_lines_render_all_fields() {
        let summary = ManifestSummary::from_manifest(&manifest(), Some("app2"));

        assert_eq!(
            summary.lines(),
            vec![
                "Lifecycle: ephemeral",
                "Deployed: 2026-10-16T08:30:00Z",
                "Config: https://cfg.example.com/sandbox.json",
                "Apps:",
                "  app1 (main)",
                "  app2 (feature/x) (current)",
            ]
        );
    }

    #[test]
    fn summary_without_current_app_marks_nothing() {
        let summary = ManifestSummary::from_manifest(&manifest(), None);
        assert!(summary.apps.iter().all(|a| !a.current));
    }

    #[test]
    fn missing_fields_render_as_dash() {
        let mut manifest = EcosystemManifest::default();
        manifest.apps.insert("app1".to_string(), AppEntry::default());

        let summary = ManifestSummary::from_manifest(&manifest, Some("app1"));

        assert_eq!(summary.lifecycle, "-");
        assert_eq!(summary.deployed_at, "-");
        assert_eq!(summary.config_url, "-");
        assert_eq!(summary.apps[0].render(), "app1 (-) (current)");
    }

    #[test]
    fn unavailable_view_renders_notice() {
        assert_eq!(
            EcosystemView::Unavailable.lines(),
            vec!["Ecosystem manifest unavailable"]
        );
    }
}
