//! Static site build step.
//!
//! Stamps build metadata into a flat directory of source files:
//!
//! 1. Resolve a [`BuildContext`] (ref, sha, build time, environment)
//! 2. Load the environment's raw JSON config ([`EnvConfig`])
//! 3. Replace every [`Placeholder`] in every source file
//! 4. Write the results to the output directory
//!
//! # Example
//!
//! ```
//! use chrono::Utc;
//! use sitestamp::build::{BuildContext, Substitutions};
//!
//! let ctx = BuildContext::from_lookup(|_| Err(std::env::VarError::NotPresent), Utc::now());
//! let subs = Substitutions::new(&ctx, "{}");
//! let (out, _) = subs.apply("env=__APP_ENV__");
//! assert_eq!(out, "env=dev");
//! ```

pub mod builder;
pub mod context;
pub mod env_config;
pub mod placeholder;

pub use builder::{build, verify_output, BuildPaths, BuildReport, BuiltFile, Leftover};
pub use context::BuildContext;
pub use env_config::{config_name_for, EnvConfig};
pub use placeholder::{find_placeholders, Placeholder, Substitutions};
