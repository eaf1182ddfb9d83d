//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// Sitestamp - Build-time stamping and environment detection for static sites.
#[derive(Debug, Parser)]
#[command(name = "sitestamp")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project config file (overrides default sitestamp.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Stamp source files into the output directory (default if no command specified)
    Build(BuildArgs),

    /// Detect the environment a page URL belongs to
    Detect(DetectArgs),

    /// Show what a page at a URL would render
    Preview(PreviewArgs),

    /// Check the output directory for unreplaced placeholders
    Verify(VerifyArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Build identity overrides, shared by `build` and `preview`.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ContextArgs {
    /// Git ref to stamp (e.g. branch or tag name)
    #[arg(long = "ref", env = "APP_REF", value_name = "REF")]
    pub git_ref: Option<String>,

    /// Commit SHA to stamp
    #[arg(long, env = "APP_SHA")]
    pub sha: Option<String>,

    /// Target environment (e.g. dev, staging, prod, sandbox-pr-12)
    #[arg(long, env = "APP_ENV", value_name = "ENV")]
    pub env: Option<String>,
}

/// Arguments for the `build` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct BuildArgs {
    /// Source directory (default: src)
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,

    /// Environment config directory (default: config)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Output directory (default: dist)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    #[command(flatten)]
    pub context: ContextArgs,
}

/// Arguments for the `detect` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct DetectArgs {
    /// Full page URL (e.g. https://staging.example.com/app2)
    #[arg(required_unless_present = "host", conflicts_with = "host")]
    pub url: Option<String>,

    /// Page hostname, instead of a full URL
    #[arg(long)]
    pub host: Option<String>,

    /// Page path, used with --host
    #[arg(long, default_value = "/")]
    pub path: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// App ids to compute nav links for (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub nav: Vec<String>,
}

/// Arguments for the `preview` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct PreviewArgs {
    /// Full page URL to preview
    pub url: String,

    /// Name of the app rendering the page
    #[arg(long)]
    pub app: Option<String>,

    /// App ids the page links to (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub nav: Vec<String>,

    /// Environment config directory (default: config)
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(flatten)]
    pub context: ContextArgs,
}

/// Arguments for the `verify` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct VerifyArgs {
    /// Output directory to check (default: dist)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
