//! Affected Projects Use Case
//!
//! Orchestrates one run:
//! 1. Detect changed files (explicit list, revision range, or current commit)
//! 2. Narrow them with the include/exclude filter
//! 3. Resolve the affected project directories
//!
//! Pure orchestration; resolution rules live in the domain resolver.

use crate::domain::ports::{ChangeSource, FileFilter, FileStore};
use crate::domain::services::{ProjectResolver, Resolution, ResolverConfig};
use crate::error::AffectedResult;

use super::change_detector::{ChangeDetector, ChangeOrigin, ChangeRequest};

/// Options for one affected-projects run
#[derive(Debug, Clone, Default)]
pub struct AffectedOptions {
    pub changes: ChangeRequest,
    /// Include globs applied to changed files (empty admits all)
    pub include: Vec<String>,
    /// Exclude globs applied to changed files
    pub exclude: Vec<String>,
    pub resolver: ResolverConfig,
}

/// Result of an affected-projects run
#[derive(Debug, Clone)]
pub struct AffectedReport {
    /// Changed files after filtering
    pub changed_files: Vec<String>,
    pub origin: ChangeOrigin,
    pub resolution: Resolution,
}

impl AffectedReport {
    pub fn directory_names(&self) -> Vec<String> {
        self.resolution.directory_names()
    }

    pub fn is_empty(&self) -> bool {
        self.resolution.directories.is_empty()
    }
}

/// Affected projects use case
///
/// Parameterized by its ports so tests can swap in an in-memory tree and a
/// fake change source.
pub struct AffectedProjectsUseCase<S, C, F>
where
    S: FileStore,
    C: ChangeSource,
    F: FileFilter,
{
    store: S,
    detector: ChangeDetector<C>,
    filter: F,
}

impl<S, C, F> AffectedProjectsUseCase<S, C, F>
where
    S: FileStore,
    C: ChangeSource,
    F: FileFilter,
{
    pub fn new(store: S, source: C, filter: F) -> Self {
        Self {
            store,
            detector: ChangeDetector::new(source),
            filter,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn execute(&self, options: &AffectedOptions) -> AffectedResult<AffectedReport> {
        let detected = self.detector.detect(&options.changes)?;
        let detected_count = detected.files.len();

        let changed_files = self
            .filter
            .filter(&detected.files, &options.include, &options.exclude)?;
        tracing::debug!(
            detected = detected_count,
            kept = changed_files.len(),
            "filtered changed files"
        );

        let resolution = ProjectResolver::new(&self.store)
            .resolve_affected_projects(&changed_files, &options.resolver);
        tracing::info!(
            count = resolution.directories.len(),
            "resolved affected projects"
        );

        Ok(AffectedReport {
            changed_files,
            origin: detected.origin,
            resolution,
        })
    }
}
