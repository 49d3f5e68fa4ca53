//! File Store Implementations
//!
//! Concrete implementations of the FileStore port.

mod local;
mod memory;
pub(crate) mod pattern;

pub use local::{LocalFileStore, SKIPPED_DIRS};
pub use memory::MemoryFileStore;
