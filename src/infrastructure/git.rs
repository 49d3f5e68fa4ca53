//! Git Change Source
//!
//! Lists changed files by shelling out to the `git` binary. Revisions are
//! validated `GitRef`s, so nothing user-provided reaches the command line
//! unchecked.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::domain::ports::ChangeSource;
use crate::domain::value_objects::GitRef;
use crate::error::{AffectedError, AffectedResult};

/// Change source backed by the `git` CLI
#[derive(Debug, Clone)]
pub struct GitCli {
    repo_root: PathBuf,
}

impl GitCli {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Check if git is installed and available
    pub fn check_available() -> bool {
        Command::new("git")
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map(|s| s.success())
            .unwrap_or(false)
    }

    fn run(&self, args: &[&str]) -> AffectedResult<Vec<String>> {
        tracing::debug!(command = %format!("git {}", args.join(" ")), "executing git");

        let output = Command::new("git")
            .current_dir(&self.repo_root)
            .args(["-c", "core.quotepath=off"])
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| AffectedError::Git(e.to_string()))?;

        if !output.status.success() {
            return Err(AffectedError::Git(format!(
                "`git {}` exited with code {:?}: {}",
                args.join(" "),
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let files = parse_name_list(&String::from_utf8_lossy(&output.stdout));
        tracing::debug!(count = files.len(), "git returned changed files");
        Ok(files)
    }
}

impl ChangeSource for GitCli {
    fn changed_files(&self, base: &GitRef, head: &GitRef) -> AffectedResult<Vec<String>> {
        let range = format!("{}..{}", base, head);
        self.run(&["diff", "--name-only", &range, "--"])
    }

    fn changed_files_for_current_commit(&self) -> AffectedResult<Vec<String>> {
        let (parent, head) = (GitRef::parse("HEAD^")?, GitRef::parse("HEAD")?);
        match self.changed_files(&parent, &head) {
            Ok(files) => Ok(files),
            Err(e) => {
                // first commit of a repository has no parent
                tracing::debug!(error = %e, "HEAD^..HEAD failed, falling back to git show");
                match self.run(&["show", "--name-only", "--format=", "HEAD"]) {
                    Ok(files) => Ok(files),
                    Err(e) => {
                        tracing::warn!(error = %e, "could not list files of the current commit");
                        Ok(Vec::new())
                    }
                }
            }
        }
    }
}

/// Split `--name-only` output into paths, dropping blank lines.
pub fn parse_name_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
