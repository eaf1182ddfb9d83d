//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. This allows:
//! - Single binary with subcommands (`sitestamp build`, `sitestamp detect`)
//! - Shared project config loading
//! - Consistent global flag handling

pub mod build;
pub mod completions;
pub mod detect;
pub mod dispatcher;
pub mod preview;
pub mod resolve;
pub mod verify;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
