//! Mock page for testing.
//!
//! `MockPage` implements [`PageSurface`] and records every mutation for
//! later assertion.
//!
//! # Example
//!
//! ```
//! use sitestamp::page::{MockPage, PageField, PageSurface};
//!
//! let mut page = MockPage::with_nav(&[("app1", "/app1")]);
//! page.set_field(PageField::Env, "dev");
//! page.set_nav_href("app1", "/dev/app1");
//!
//! assert_eq!(page.field(PageField::Env), Some("dev"));
//! assert_eq!(page.nav_href("app1"), Some("/dev/app1"));
//! ```

use std::collections::{BTreeMap, HashMap};

use crate::manifest::EcosystemView;

use super::{PageField, PageSurface};

/// Mock page implementation for testing.
#[derive(Debug, Default)]
pub struct MockPage {
    fields: HashMap<PageField, String>,
    nav: BTreeMap<String, String>,
    config: Option<String>,
    ecosystem: Option<EcosystemView>,
    events: Vec<String>,
}

impl MockPage {
    /// Create an empty page with no nav links.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a page with nav links as `(app, initial href)` pairs.
    pub fn with_nav(links: &[(&str, &str)]) -> Self {
        Self {
            nav: links
                .iter()
                .map(|(app, href)| (app.to_string(), href.to_string()))
                .collect(),
            ..Default::default()
        }
    }

    /// Current text of a field.
    pub fn field(&self, field: PageField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Current href of the nav link for `app`.
    pub fn nav_href(&self, app: &str) -> Option<&str> {
        self.nav.get(app).map(String::as_str)
    }

    /// Rendered config, if set.
    pub fn config(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Ecosystem view, if set.
    pub fn ecosystem(&self) -> Option<&EcosystemView> {
        self.ecosystem.as_ref()
    }

    /// Every mutation in the order it happened.
    pub fn events(&self) -> &[String] {
        &self.events
    }
}

impl PageSurface for MockPage {
    fn set_field(&mut self, field: PageField, text: &str) {
        self.events.push(format!("field:{}", field));
        self.fields.insert(field, text.to_string());
    }

    fn nav_apps(&self) -> Vec<String> {
        self.nav.keys().cloned().collect()
    }

    fn set_nav_href(&mut self, app: &str, href: &str) {
        self.events.push(format!("nav:{}", app));
        self.nav.insert(app.to_string(), href.to_string());
    }

    fn set_config(&mut self, rendered: &str) {
        self.events.push("config".to_string());
        self.config = Some(rendered.to_string());
    }

    fn set_ecosystem(&mut self, view: &EcosystemView) {
        self.events.push("ecosystem".to_string());
        self.ecosystem = Some(view.clone());
    }
}
