//! FileFilter port - include/exclude filtering of changed files

use crate::error::AffectedResult;

/// Narrows a changed-file list before it reaches the resolution engine.
pub trait FileFilter {
    /// Keep files matching `include` (all files when empty) and not matching `exclude`.
    fn filter(
        &self,
        files: &[String],
        include: &[String],
        exclude: &[String],
    ) -> AffectedResult<Vec<String>>;
}
