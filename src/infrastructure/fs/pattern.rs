//! Pattern matching shared by the file store implementations
//!
//! Globs follow shell conventions: `*` stays within one path segment, `**`
//! crosses segments, and dotfiles are matched like any other file.

use globset::{GlobBuilder, GlobMatcher};
use regex::Regex;

use crate::domain::ports::{FsError, FsResult};

pub(crate) fn compile_glob(pattern: &str) -> FsResult<GlobMatcher> {
    GlobBuilder::new(pattern)
        .literal_separator(true)
        .build()
        .map(|glob| glob.compile_matcher())
        .map_err(|e| FsError::InvalidPattern {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

pub(crate) fn base_name(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Pattern for `find_files`: exact base name, full-path glob, or (for
/// patterns without `/`) base-name glob.
pub(crate) struct NamePattern {
    raw: String,
    glob: GlobMatcher,
    match_base: bool,
}

impl NamePattern {
    pub(crate) fn new(pattern: &str) -> FsResult<Self> {
        Ok(Self {
            raw: pattern.to_string(),
            glob: compile_glob(pattern)?,
            match_base: !pattern.contains('/'),
        })
    }

    pub(crate) fn matches(&self, path: &str) -> bool {
        let name = base_name(path);
        name == self.raw
            || self.glob.is_match(path)
            || (self.match_base && self.glob.is_match(name))
    }
}

/// Exclusion list: an entry matches as a glob or as a plain substring.
pub(crate) struct ExcludeSet {
    entries: Vec<(String, Option<GlobMatcher>)>,
}

impl ExcludeSet {
    pub(crate) fn new(exclude: &[&str]) -> Self {
        let entries = exclude
            .iter()
            .map(|raw| (raw.to_string(), compile_glob(raw).ok()))
            .collect();
        Self { entries }
    }

    pub(crate) fn matches(&self, path: &str) -> bool {
        self.entries.iter().any(|(raw, glob)| {
            path.contains(raw.as_str()) || glob.as_ref().is_some_and(|g| g.is_match(path))
        })
    }
}

/// Content predicate for `search_file_contents`.
pub(crate) enum ContentMatcher {
    Substring(String),
    Word(Regex),
}

impl ContentMatcher {
    pub(crate) fn new(needle: &str, word_match: bool) -> FsResult<Self> {
        if !word_match {
            return Ok(ContentMatcher::Substring(needle.to_string()));
        }
        Regex::new(&format!(r"\b{}\b", regex::escape(needle)))
            .map(ContentMatcher::Word)
            .map_err(|e| FsError::InvalidPattern {
                pattern: needle.to_string(),
                message: e.to_string(),
            })
    }

    pub(crate) fn is_match(&self, content: &str) -> bool {
        match self {
            ContentMatcher::Substring(needle) => content.contains(needle.as_str()),
            ContentMatcher::Word(regex) => regex.is_match(content),
        }
    }
}
