//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod change_source;
pub mod file_filter;
pub mod file_store;

pub use change_source::ChangeSource;
pub use file_filter::FileFilter;
pub use file_store::{FileStore, FsError, FsResult};
