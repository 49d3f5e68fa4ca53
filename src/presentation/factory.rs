//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::Path;

use crate::application::AffectedProjectsUseCase;
use crate::error::AffectedResult;
use crate::infrastructure::{GitCli, GlobFileFilter, LocalFileStore};

/// Type alias for the concrete AffectedProjectsUseCase with all dependencies
pub type ConcreteAffectedUseCase = AffectedProjectsUseCase<LocalFileStore, GitCli, GlobFileFilter>;

/// Create an affected-projects use case over the tree at `root`
///
/// The tree root doubles as the git working directory.
pub fn create_affected_use_case(root: &Path) -> AffectedResult<ConcreteAffectedUseCase> {
    let store = LocalFileStore::open(root)?;
    let source = GitCli::new(root);
    let filter = GlobFileFilter::new();

    Ok(AffectedProjectsUseCase::new(store, source, filter))
}
