//! Error types for tfaffected
//!
//! Library errors use `thiserror`; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::FsError;

/// Result type alias for tfaffected operations
pub type AffectedResult<T> = Result<T, AffectedError>;

/// Main error type for host-side operations (config, change detection, filtering).
///
/// The resolution engine itself never produces one of these.
#[derive(Error, Debug)]
pub enum AffectedError {
    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Revision identifier failed validation
    #[error("invalid git reference '{reference}': {reason}")]
    InvalidGitRef { reference: String, reason: String },

    /// `git` invocation failed
    #[error("git command failed: {0}")]
    Git(String),

    /// Include/exclude glob could not be compiled
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Root directory of the tree does not exist
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// File store failure surfaced to the host
    #[error(transparent)]
    Fs(#[from] FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
