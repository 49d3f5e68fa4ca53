//! FileStore port - read-only view over an infrastructure-as-code tree
//!
//! This trait allows the resolution engine to discover files and search
//! their contents without depending on concrete implementations.
//!
//! All paths crossing this boundary are tree-relative and `/`-separated.

use thiserror::Error;

/// Result type for file store operations
pub type FsResult<T> = Result<T, FsError>;

/// File store operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("File not found: {0}")]
    NotFound(String),

    /// Permission denied
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// Glob pattern could not be compiled
    #[error("Invalid glob pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),
}

impl FsError {
    /// Map an I/O error for `path` onto the port's error kinds.
    pub fn from_io(path: &str, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_string()),
            _ => FsError::Io(err),
        }
    }
}

/// Abstract file store interface
///
/// Implementations:
/// - `LocalFileStore` - walks a directory on disk
/// - `MemoryFileStore` - in-memory fixture for tests
///
/// Implementations must be `Sync`: content scans may fan out across threads.
pub trait FileStore: Sync {
    /// Every file whose base name equals `pattern` or that matches it as a glob,
    /// skipping paths that match any `exclude` entry (glob or plain substring).
    fn find_files(&self, pattern: &str, exclude: &[&str]) -> FsResult<Vec<String>>;

    /// Every file (optionally restricted to `file_pattern`) whose content contains
    /// `needle`, either as a substring or as a whole word when `word_match` is set.
    fn search_file_contents(
        &self,
        needle: &str,
        file_pattern: Option<&str>,
        word_match: bool,
    ) -> FsResult<Vec<String>>;

    /// Read file content as string
    fn read_file(&self, path: &str) -> FsResult<String>;
}
