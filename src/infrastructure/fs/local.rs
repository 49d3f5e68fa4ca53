//! Local File Store Implementation
//!
//! Implements the FileStore port over a directory on disk using the `ignore`
//! crate's walker. Version-control metadata and tool caches are never walked.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use rayon::prelude::*;

use crate::domain::ports::file_store::{FileStore, FsError, FsResult};
use crate::domain::value_objects::DirPath;
use crate::error::{AffectedError, AffectedResult};

use super::pattern::{compile_glob, ContentMatcher, ExcludeSet, NamePattern};

/// Directory names skipped by every walk.
pub const SKIPPED_DIRS: &[&str] = &[".git", ".terraform", "node_modules"];

/// Local file store rooted at a tree directory.
///
/// Paths handed out and accepted are relative to the root and `/`-separated.
#[derive(Debug, Clone)]
pub struct LocalFileStore {
    root: PathBuf,
}

impl LocalFileStore {
    /// Open a store rooted at `root`, which must be an existing directory.
    pub fn open(root: impl Into<PathBuf>) -> AffectedResult<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(AffectedError::DirectoryNotFound { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Every file under the root, sorted, as tree-relative paths.
    fn walk(&self) -> Vec<String> {
        let walker = WalkBuilder::new(&self.root)
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b))
            .filter_entry(|entry| {
                let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
                !(is_dir && SKIPPED_DIRS.iter().any(|skip| entry.file_name() == *skip))
            })
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::debug!(error = %e, "skipping unreadable walk entry");
                    continue;
                }
            };
            if !entry.file_type().is_some_and(|t| t.is_file()) {
                continue;
            }
            if let Some(relative) = self.relative(entry.path()) {
                files.push(relative);
            }
        }
        files.sort();
        files
    }

    fn relative(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        (!segments.is_empty()).then(|| segments.join("/"))
    }

    /// On-disk path for a tree-relative path; `None` when it leaves the tree.
    fn absolute(&self, relative: &str) -> Option<PathBuf> {
        let normalized = DirPath::parse(relative)?;
        Some(
            normalized
                .segments()
                .iter()
                .fold(self.root.clone(), |acc, segment| acc.join(segment)),
        )
    }
}

impl FileStore for LocalFileStore {
    fn find_files(&self, pattern: &str, exclude: &[&str]) -> FsResult<Vec<String>> {
        let pattern = NamePattern::new(pattern)?;
        let exclude = ExcludeSet::new(exclude);

        Ok(self
            .walk()
            .into_iter()
            .filter(|path| !exclude.matches(path) && pattern.matches(path))
            .collect())
    }

    fn search_file_contents(
        &self,
        needle: &str,
        file_pattern: Option<&str>,
        word_match: bool,
    ) -> FsResult<Vec<String>> {
        let glob = file_pattern.map(compile_glob).transpose()?;
        let matcher = ContentMatcher::new(needle, word_match)?;

        let candidates: Vec<String> = self
            .walk()
            .into_iter()
            .filter(|path| glob.as_ref().map_or(true, |g| g.is_match(path.as_str())))
            .collect();

        Ok(candidates
            .into_par_iter()
            .filter(|path| match self.read_file(path) {
                Ok(content) => matcher.is_match(&content),
                Err(e) => {
                    tracing::trace!(file = %path, error = %e, "skipping unreadable file");
                    false
                }
            })
            .collect())
    }

    fn read_file(&self, path: &str) -> FsResult<String> {
        let absolute = self
            .absolute(path)
            .ok_or_else(|| FsError::NotFound(path.to_string()))?;
        std::fs::read_to_string(absolute).map_err(|e| FsError::from_io(path, e))
    }
}
