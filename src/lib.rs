//! Sitestamp - Build-time stamping and runtime environment detection for
//! static sites.
//!
//! A static site is built once per deployment: every source file has its
//! `__APP_REF__`, `__APP_SHA__`, `__BUILD_TIME__`, `__APP_ENV__` and
//! `__APP_CONFIG__` placeholders replaced. At page load the site works out
//! which environment it is being served from, by path or by subdomain, and
//! links to its sibling apps accordingly.
//!
//! # Modules
//!
//! - [`build`] - Placeholder substitution and environment config resolution
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Project configuration (`sitestamp.yml`)
//! - [`environment`] - Environment and routing mode detection
//! - [`error`] - Error types and result aliases
//! - [`manifest`] - Ecosystem manifest fetching and rendering
//! - [`page`] - Page-load sequence over an abstract page surface
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use sitestamp::environment::{detect, RoutingMode};
//!
//! let detected = detect("sandbox-pr-12.example.com", "/app1");
//! assert_eq!(detected.env, "sandbox-pr-12");
//! assert_eq!(detected.routing_mode, RoutingMode::Subdomain);
//! ```
//!
//! For file-based builds, see the integration tests.

pub mod build;
pub mod cli;
pub mod config;
pub mod environment;
pub mod error;
pub mod manifest;
pub mod page;
pub mod ui;

pub use error::{Result, SiteStampError};
