//! In-memory File Store
//!
//! A fixed map of tree-relative paths to contents. Used by tests and by hosts
//! that already hold the files they want resolved.

use std::collections::BTreeMap;

use crate::domain::ports::file_store::{FileStore, FsError, FsResult};

use super::pattern::{compile_glob, ContentMatcher, ExcludeSet, NamePattern};

#[derive(Debug, Clone, Default)]
pub struct MemoryFileStore {
    files: BTreeMap<String, String>,
}

impl MemoryFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_files<P, C>(files: impl IntoIterator<Item = (P, C)>) -> Self
    where
        P: Into<String>,
        C: Into<String>,
    {
        Self {
            files: files
                .into_iter()
                .map(|(path, content)| (path.into(), content.into()))
                .collect(),
        }
    }

    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }
}

impl FileStore for MemoryFileStore {
    fn find_files(&self, pattern: &str, exclude: &[&str]) -> FsResult<Vec<String>> {
        let pattern = NamePattern::new(pattern)?;
        let exclude = ExcludeSet::new(exclude);

        Ok(self
            .paths()
            .filter(|path| !exclude.matches(path) && pattern.matches(path))
            .map(str::to_string)
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

        Ok(self
            .files
            .iter()
            .filter(|(path, _)| glob.as_ref().map_or(true, |g| g.is_match(path.as_str())))
            .filter(|(_, content)| matcher.is_match(content))
            .map(|(path, _)| path.clone())
            .collect())
    }

    fn read_file(&self, path: &str) -> FsResult<String> {
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_string()))
    }
}
