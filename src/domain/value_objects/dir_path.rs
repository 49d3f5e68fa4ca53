//! Directory Path Value Object
//!
//! A tree-relative directory held as an explicit segment list:
//! - `.` and empty segments are dropped
//! - `..` pops the previous segment and may never climb above the root
//! - `/` and `\` are both accepted as separators
//!
//! The root of the tree is the empty segment list and displays as `.`.

use std::fmt;
use std::path::Path;

/// Display form of the tree root.
pub const ROOT_MARKER: &str = ".";

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DirPath {
    segments: Vec<String>,
}

impl DirPath {
    /// The tree root.
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse a tree-relative path into its canonical form.
    ///
    /// Returns `None` for absolute paths and for paths that climb above the root.
    pub fn parse(raw: &str) -> Option<Self> {
        if is_absolute(raw) {
            return None;
        }
        Self::root().join_relative(raw)
    }

    /// Directory containing `file`. A file at the tree root maps to the root.
    ///
    /// Returns `None` for empty input and for paths outside the tree.
    pub fn parent_of_file(file: &str) -> Option<Self> {
        if file.trim().is_empty() {
            return None;
        }
        let mut path = Self::parse(file)?;
        path.segments.pop();
        Some(path)
    }

    /// Resolve `relative` against this directory.
    ///
    /// Returns `None` when `relative` is absolute or the result escapes the tree.
    pub fn join_relative(&self, relative: &str) -> Option<Self> {
        if is_absolute(relative) {
            return None;
        }

        let mut segments = self.segments.clone();
        for segment in relative.split(['/', '\\']) {
            match segment {
                "" | "." => {}
                ".." => {
                    segments.pop()?;
                }
                other => segments.push(other.to_string()),
            }
        }
        Some(Self { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Final segment, `None` for the root.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for DirPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            f.write_str(ROOT_MARKER)
        } else {
            f.write_str(&self.segments.join("/"))
        }
    }
}

fn is_absolute(raw: &str) -> bool {
    raw.starts_with('/') || raw.starts_with('\\') || Path::new(raw).is_absolute()
}
