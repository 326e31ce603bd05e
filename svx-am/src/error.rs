//! Error types for svx-am
//!
//! Defines module-specific error types using thiserror for clear error
//! propagation.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience Result type using svx-am Error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the manifest generator
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file loading or parsing errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Manifest file write failures
    ///
    /// Raised from the truncate-and-write step. Enumeration failures never
    /// reach here; an unreadable source directory yields an empty manifest.
    #[error("Failed to write manifest {0}: {1}")]
    Write(PathBuf, String),
}
