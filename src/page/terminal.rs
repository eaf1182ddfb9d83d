//! Page rendered to a terminal.

use std::collections::BTreeMap;

use crate::manifest::EcosystemView;
use crate::ui::UserInterface;

use super::{PageField, PageSurface};

/// A [`PageSurface`] that prints each mutation to a [`UserInterface`].
pub struct UiPage<'a> {
    ui: &'a mut dyn UserInterface,
    nav: BTreeMap<String, String>,
}

impl<'a> UiPage<'a> {
    /// Create a page whose nav links target `apps`, each at `/<app>`.
    pub fn new(ui: &'a mut dyn UserInterface, apps: &[String]) -> Self {
        let nav = apps
            .iter()
            .map(|app| (app.clone(), format!("/{}", app)))
            .collect();
        Self { ui, nav }
    }

    /// Current nav links as `(app, href)` pairs.
    pub fn nav_links(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nav.iter().map(|(app, href)| (app.as_str(), href.as_str()))
    }

    /// Print the nav links in their final state.
    pub fn show_nav(&mut self) {
        if self.nav.is_empty() {
            return;
        }
        self.ui.message("Navigation:");
        for (app, href) in &self.nav {
            self.ui.message(&format!("  {} -> {}", app, href));
        }
    }
}

impl PageSurface for UiPage<'_> {
    fn set_field(&mut self, field: PageField, text: &str) {
        self.ui.key_value(field.id(), text);
    }

    fn nav_apps(&self) -> Vec<String> {
        self.nav.keys().cloned().collect()
    }

    fn set_nav_href(&mut self, app: &str, href: &str) {
        self.nav.insert(app.to_string(), href.to_string());
    }

    fn set_config(&mut self, rendered: &str) {
        self.ui.message("Config:");
        for line in rendered.lines() {
            self.ui.message(&format!("  {}", line));
        }
    }

    fn set_ecosystem(&mut self, view: &EcosystemView) {
        match view {
            EcosystemView::Loaded(summary) => {
                self.ui.message("Ecosystem:");
                for line in summary.lines() {
                    self.ui.message(&format!("  {}", line));
                }
            }
            EcosystemView::Unavailable => {
                self.ui.warning(EcosystemView::UNAVAILABLE_NOTICE);
            }
        }
    }
}
