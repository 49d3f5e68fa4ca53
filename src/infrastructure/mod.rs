//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - File store implementations (Local, Memory)
//! - `git` - Change source backed by the git CLI
//! - `filter` - Glob include/exclude filtering of changed files

pub mod filter;
pub mod fs;
pub mod git;

// Re-export for convenience
pub use filter::GlobFileFilter;
pub use fs::{LocalFileStore, MemoryFileStore};
pub use git::GitCli;
