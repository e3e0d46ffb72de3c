//! Error types for install operations.
//!
//! This module defines [`InstallError`], the primary error type used
//! throughout the installer, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Precondition failures (wrong OS, not root, already installed) get their
//!   own variants so `main` can report them plainly and exit with code 1
//! - I/O, network, and subprocess faults propagate with `?` and exit with
//!   code 2 after a single top-level report
//! - Use `anyhow::Error` (via `InstallError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for install operations.
#[derive(Debug, Error)]
pub enum InstallError {
    /// Host operating system is not Linux.
    #[error("this installer only supports Linux (detected '{os}')")]
    UnsupportedPlatform { os: String },

    /// Effective user is not root.
    #[error("this installer must be run as root")]
    NotRoot,

    /// The install directory already exists.
    #[error("Go is already installed at {path}")]
    AlreadyInstalled { path: PathBuf },

    /// Network fault or bad response while fetching version or archive.
    #[error("download failed for {url}: {message}")]
    Download { url: String, message: String },

    /// The extraction subprocess could not run or exited non-zero.
    #[error("archive extraction failed: {message}")]
    Extraction { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl InstallError {
    /// Whether this is a precondition failure, reported with exit code 1.
    pub fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedPlatform { .. } | Self::NotRoot | Self::AlreadyInstalled { .. }
        )
    }
}

/// Result type alias for install operations.
pub type Result<T> = std::result::Result<T, InstallError>;
