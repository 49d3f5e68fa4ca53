//! tfaffected - affected Terraform project resolution
//!
//! Given the files changed in a monorepo of Terraform configurations, works
//! out which deployable project directories need to be planned or applied.
//! Shared modules, per-project module directories and plain projects are told
//! apart by path, and module usage is followed through `source` declarations
//! until only projects remain.

pub mod application;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{AffectedOptions, AffectedProjectsUseCase, AffectedReport, ChangeRequest};
pub use config::Config;
pub use domain::ports::{ChangeSource, FileFilter, FileStore};
pub use domain::services::{
    classify, resolve_affected_projects, DirectoryRole, ProjectResolver, Resolution,
    ResolutionTrace, ResolverConfig, StepAction,
};
pub use domain::value_objects::{DirPath, GitRef};
pub use error::{AffectedError, AffectedResult};
pub use infrastructure::{GitCli, GlobFileFilter, LocalFileStore, MemoryFileStore};
