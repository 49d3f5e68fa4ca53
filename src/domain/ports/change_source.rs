//! ChangeSource port - where the list of changed files comes from

use crate::domain::value_objects::GitRef;
use crate::error::AffectedResult;

/// Provider of changed file paths from version-control history.
///
/// Implementations:
/// - `GitCli` - shells out to the `git` binary
pub trait ChangeSource {
    /// Files changed between `base` and `head`.
    fn changed_files(&self, base: &GitRef, head: &GitRef) -> AffectedResult<Vec<String>>;

    /// Files changed by the most recent commit.
    fn changed_files_for_current_commit(&self) -> AffectedResult<Vec<String>>;
}
