//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod dir_path;
mod git_ref;

pub use dir_path::{DirPath, ROOT_MARKER};
pub use git_ref::GitRef;
