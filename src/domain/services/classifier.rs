//! Directory classifier
//!
//! Assigns a role to a directory purely from its path segments. No file is
//! opened: the heuristic is lexical and always yields a role.

use std::fmt;

use serde::Serialize;

use crate::domain::value_objects::DirPath;

/// Role of a directory in the reference graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DirectoryRole {
    /// Lives under a `modules` tree and is reused across projects.
    SharedModule,
    /// A `module` directory holding one project's per-environment definition.
    ProjectModule,
    /// Terminal: directly deployable.
    Project,
}

impl DirectoryRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirectoryRole::SharedModule => "shared-module",
            DirectoryRole::ProjectModule => "project-module",
            DirectoryRole::Project => "project",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, DirectoryRole::Project)
    }
}

impl fmt::Display for DirectoryRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a directory.
///
/// Rules, first match wins:
/// 1. an ancestor segment named `modules` (or ending in it, like `_modules`) → `SharedModule`
/// 2. final segment exactly `module` → `ProjectModule`
/// 3. anything else → `Project`
pub fn classify(dir: &DirPath) -> DirectoryRole {
    let segments = dir.segments();
    let ancestors = &segments[..segments.len().saturating_sub(1)];

    if ancestors.iter().any(|s| is_shared_modules_segment(s)) {
        DirectoryRole::SharedModule
    } else if dir.last() == Some("module") {
        DirectoryRole::ProjectModule
    } else {
        DirectoryRole::Project
    }
}

/// True when any segment of `dir` (the final one included) names a module
/// tree. Used to keep module directories out of the project inventory.
pub fn is_inside_module_tree(dir: &DirPath) -> bool {
    dir.segments()
        .iter()
        .any(|s| s == "module" || is_shared_modules_segment(s))
}

fn is_shared_modules_segment(segment: &str) -> bool {
    segment.ends_with("modules")
}
