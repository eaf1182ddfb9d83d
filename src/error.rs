//! Error types for sitestamp operations.
//!
//! This module defines [`SiteStampError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Fatal build failures (missing sources, unwritable output) get their own
//!   variants so commands can report the offending path
//! - Recoverable failures (missing environment config, unreachable manifest)
//!   are logged and never surface as errors from the top-level operations
//! - Use `anyhow::Error` (via `SiteStampError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for sitestamp operations.
#[derive(Debug, Error)]
pub enum SiteStampError {
    /// The source directory does not exist or is not a directory.
    #[error("Source directory not found: {path}")]
    SourceDirNotFound { path: PathBuf },

    /// A source file could not be read.
    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file or directory could not be written.
    #[error("Failed to write {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The environment config exists but could not be read.
    #[error("Failed to read environment config {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the project config file.
    #[error("Failed to parse config at {path}: {message}")]
    ProjectConfigParse { path: PathBuf, message: String },

    /// A page URL could not be interpreted.
    #[error("Invalid page location '{input}': {message}")]
    InvalidLocation { input: String, message: String },

    /// The ecosystem manifest could not be fetched or decoded.
    #[error("Ecosystem manifest unavailable at {url}: {message}")]
    ManifestUnavailable { url: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sitestamp operations.
pub type Result<T> = std::result::Result<T, SiteStampError>;
