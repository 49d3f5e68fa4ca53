//! Glob File Filter
//!
//! Implements the FileFilter port. Exclusion wins over inclusion, an empty
//! include list admits every file, and a leading `!` negates a pattern.

use globset::GlobMatcher;

use crate::domain::ports::{FileFilter, FsError};
use crate::error::{AffectedError, AffectedResult};
use crate::infrastructure::fs::pattern::compile_glob;

#[derive(Debug, Clone, Copy, Default)]
pub struct GlobFileFilter;

impl GlobFileFilter {
    pub fn new() -> Self {
        Self
    }
}

struct FilterPattern {
    glob: GlobMatcher,
    negated: bool,
}

impl FilterPattern {
    fn matches(&self, file: &str) -> bool {
        self.glob.is_match(file) != self.negated
    }
}

fn compile(patterns: &[String]) -> AffectedResult<Vec<FilterPattern>> {
    patterns
        .iter()
        .map(|raw| {
            let (negated, body) = match raw.strip_prefix('!') {
                Some(rest) => (true, rest),
                None => (false, raw.as_str()),
            };
            let glob = compile_glob(body).map_err(|e| match e {
                FsError::InvalidPattern { message, .. } => AffectedError::InvalidPattern {
                    pattern: raw.clone(),
                    message,
                },
                other => AffectedError::Fs(other),
            })?;
            Ok(FilterPattern { glob, negated })
        })
        .collect()
}

fn matches_any(file: &str, patterns: &[FilterPattern]) -> bool {
    patterns.iter().any(|p| p.matches(file))
}

impl FileFilter for GlobFileFilter {
    fn filter(
        &self,
        files: &[String],
        include: &[String],
        exclude: &[String],
    ) -> AffectedResult<Vec<String>> {
        let include = compile(include)?;
        let exclude = compile(exclude)?;

        Ok(files
            .iter()
            .filter(|file| !matches_any(file, &exclude))
            .filter(|file| include.is_empty() || matches_any(file, &include))
            .cloned()
            .collect())
    }
}
