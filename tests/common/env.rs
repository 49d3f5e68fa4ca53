//! Test environments: in-memory stores, on-disk trees and CLI runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;
use tfaffected::{resolve_affected_projects, MemoryFileStore, ResolverConfig};

use super::fixtures::Tree;

/// Result of running the tfaffected binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// Parse each stdout line as a JSON event
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).unwrap_or_else(|e| panic!("bad NDJSON {l:?}: {e}")))
            .collect()
    }
}

pub fn memory_store(tree: Tree) -> MemoryFileStore {
    MemoryFileStore::from_files(tree.iter().copied())
}

/// Resolve `changed` against `tree` with the default configuration.
pub fn resolve(tree: Tree, changed: &[&str]) -> Vec<String> {
    resolve_with(tree, changed, &ResolverConfig::default())
}

pub fn resolve_with(tree: Tree, changed: &[&str], config: &ResolverConfig) -> Vec<String> {
    resolve_affected_projects(&memory_store(tree), changed, config).directory_names()
}

/// A fixture tree written to a temporary directory.
pub struct TestTree {
    pub dir: TempDir,
}

impl TestTree {
    pub fn new(tree: Tree) -> Self {
        let dir = tempfile::tempdir().unwrap();
        for (relative, content) in tree {
            let path = dir.path().join(relative);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, content).unwrap();
        }
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn join(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Run the binary with `--root` pointing at this tree.
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run with extra environment variables. Inherited `TFAFFECTED_*` and
    /// `GITHUB_OUTPUT` values are cleared first.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_tfaffected"));
        cmd.current_dir(self.path())
            .arg("--root")
            .arg(self.path())
            .args(args)
            .env_remove("GITHUB_OUTPUT")
            .env_remove("RUST_LOG");
        for (key, _) in std::env::vars() {
            if key.starts_with("TFAFFECTED_") {
                cmd.env_remove(key);
            }
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}
