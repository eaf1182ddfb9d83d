//! Detect command implementation.
//!
//! The `sitestamp detect` command reports the environment and routing mode
//! a page at a given location would detect.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::cli::args::DetectArgs;
use crate::config::ProjectConfig;
use crate::environment::{nav_href, DetectedEnvironment, PageLocation, RoutingMode};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve::pick_list;

/// Detection result for one location, as reported by `detect`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectReport {
    /// Detected environment name.
    pub env: String,
    /// How the environment was identified.
    pub routing_mode: RoutingMode,
    /// Page hostname.
    pub host: String,
    /// Page path.
    pub route: String,
    /// Nav link hrefs after rewriting, keyed by app id.
    pub nav: BTreeMap<String, String>,
}

impl DetectReport {
    /// Detect `location` and compute hrefs for `apps`.
    pub fn new(location: &PageLocation, apps: &[String]) -> Self {
        let detected: DetectedEnvironment = location.detect();
        let nav = apps
            .iter()
            .map(|app| {
                let href = nav_href(&detected, app).unwrap_or_else(|| format!("/{}", app));
                (app.clone(), href)
            })
            .collect();

        Self {
            env: detected.env,
            routing_mode: detected.routing_mode,
            host: location.hostname.clone(),
            route: location.pathname.clone(),
            nav,
        }
    }
}

/// The detect command implementation.
pub struct DetectCommand {
    config: ProjectConfig,
    args: DetectArgs,
}

impl DetectCommand {
    /// Create a new detect command.
    pub fn new(config: ProjectConfig, args: DetectArgs) -> Self {
        Self { config, args }
    }

    /// Location named by the arguments.
    pub fn location(&self) -> Result<PageLocation> {
        match (&self.args.url, &self.args.host) {
            (Some(url), _) => PageLocation::parse(url),
            (None, Some(host)) => Ok(PageLocation::from_parts(host, &self.args.path)),
            (None, None) => PageLocation::parse(""),
        }
    }

    /// Compute the report without printing it.
    pub fn report(&self) -> Result<DetectReport> {
        let location = self.location()?;
        let apps = pick_list(&self.args.nav, &self.config.nav);
        Ok(DetectReport::new(&location, &apps))
    }
}

impl Command for DetectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let report = self.report()?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        ui.key_value("env", &report.env);
        ui.key_value("mode", report.routing_mode.as_str());
        ui.key_value("host", &report.host);
        ui.key_value("route", &report.route);

        if !report.nav.is_empty() {
            ui.message("Navigation:");
            for (app, href) in &report.nav {
                ui.message(&format!("  {} -> {}", app, href));
            }
        }

        Ok(CommandResult::success())
    }
}
