//! src/error.rs
//! ============================================================================
//! # AppError: Unified Error Type for the ADB File-Pull Tool
//!
//! This module defines the error enum (`AppError`) used across the entire
//! application. Each variant carries enough context for the status bar and
//! the log file, and all major modules use `Result<T, AppError>`.

use std::{io, path::PathBuf};
use thiserror::Error;

/// Unified error type for all browse/transfer operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Standard IO error, auto-converted from `io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// TOML config parsing error.
    #[error("Config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// Config file I/O error with path.
    #[error("Failed to read config file {path:?}: {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Bridge missing or no device attached. Fatal before the loop starts.
    #[error("Startup failed: {0}")]
    Startup(String),

    /// External bridge command failure (non-zero exit, unparsable output).
    #[error("External command failed: {cmd} (exit code: {code:?})\n{stderr}")]
    Bridge {
        cmd: String,
        code: Option<i32>,
        stderr: String,
    },

    /// Directory listing failure during browse. Recoverable: the view
    /// redisplays the current path with this message.
    #[error("Listing failed for {path}: {reason}")]
    Listing { path: String, reason: String },

    /// Per-file pull failure. Recoverable: the batch continues and the
    /// failure lands in the final summary.
    #[error("Pull failed for {path}: {reason}")]
    Pull { path: String, reason: String },

    /// Any other error, with description.
    #[error("Unexpected error: {0}")]
    Other(String),
}

impl AppError {
    /// Create a listing failure error.
    pub fn listing_failed<P: Into<String>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::Listing {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a per-file pull failure error.
    pub fn pull_failed<P: Into<String>, S: Into<String>>(path: P, reason: S) -> Self {
        Self::Pull {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

// Allow conversion from `anyhow::Error` as fallback.
impl From<anyhow::Error> for AppError {
    fn from(e: anyhow::Error) -> Self {
        Self::Other(e.to_string())
    }
}
