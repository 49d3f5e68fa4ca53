//! Change Detector
//!
//! Decides where the changed-file list comes from: an explicit list, a
//! base/head revision range, or the most recent commit.

use crate::domain::ports::ChangeSource;
use crate::domain::value_objects::GitRef;
use crate::error::AffectedResult;

/// Inputs describing which changes to consider
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeRequest {
    /// Explicit changed files; when non-empty nothing is asked of git
    pub files: Vec<String>,
    /// Base revision of the diff range
    pub base_ref: Option<String>,
    /// Head revision of the diff range
    pub head_ref: Option<String>,
}

impl ChangeRequest {
    pub fn from_files<S: Into<String>>(files: impl IntoIterator<Item = S>) -> Self {
        Self {
            files: files.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn range(base: impl Into<String>, head: impl Into<String>) -> Self {
        Self {
            base_ref: Some(base.into()),
            head_ref: Some(head.into()),
            ..Self::default()
        }
    }
}

/// Where a detected change list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeOrigin {
    Explicit,
    Range { base: GitRef, head: GitRef },
    CurrentCommit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedChanges {
    pub files: Vec<String>,
    pub origin: ChangeOrigin,
}

pub struct ChangeDetector<C: ChangeSource> {
    source: C,
}

impl<C: ChangeSource> ChangeDetector<C> {
    pub fn new(source: C) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &C {
        &self.source
    }

    /// Resolve a request into a list of changed files.
    ///
    /// Invalid revision identifiers and failing range diffs are errors. A
    /// request naming only one side of a range falls back to the current
    /// commit.
    pub fn detect(&self, request: &ChangeRequest) -> AffectedResult<DetectedChanges> {
        let explicit: Vec<String> = request
            .files
            .iter()
            .map(|f| f.trim())
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        if !explicit.is_empty() {
            tracing::debug!(count = explicit.len(), "using explicit changed files");
            return Ok(DetectedChanges {
                files: explicit,
                origin: ChangeOrigin::Explicit,
            });
        }

        match (non_blank(&request.base_ref), non_blank(&request.head_ref)) {
            (Some(base), Some(head)) => {
                let base = GitRef::parse(base)?;
                let head = GitRef::parse(head)?;
                tracing::debug!(base = %base, head = %head, "diffing revision range");
                let files = self.source.changed_files(&base, &head)?;
                Ok(DetectedChanges {
                    files,
                    origin: ChangeOrigin::Range { base, head },
                })
            }
            (base, head) => {
                if base.is_some() || head.is_some() {
                    tracing::warn!(
                        "both base and head refs are needed for a range diff, using the current commit"
                    );
                }
                let files = self.source.changed_files_for_current_commit()?;
                Ok(DetectedChanges {
                    files,
                    origin: ChangeOrigin::CurrentCommit,
                })
            }
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
