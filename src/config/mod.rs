//! Project configuration.
//!
//! A project may carry a `sitestamp.yml` at its root naming its directories
//! and nav links. Every key is optional and CLI flags override the file.
//!
//! # Example
//!
//! ```
//! use sitestamp::config::load_project_config;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join("sitestamp.yml"), "app_name: app2\noutput_dir: public").unwrap();
//!
//! let config = load_project_config(temp.path(), None).unwrap();
//! assert_eq!(config.app_name.as_deref(), Some("app2"));
//! assert!(config.output_dir(temp.path()).ends_with("public"));
//! ```

pub mod loader;
pub mod schema;

pub use loader::{load_project_config, parse_project_config, PROJECT_CONFIG_FILE};
pub use schema::ProjectConfig;
