//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::services::ResolverConfig;
use crate::domain::value_objects::ROOT_MARKER;
use crate::error::AffectedResult;

use super::loader::{self, ConfigWarning};

/// Resolution engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverSection {
    /// A change at the tree root affects every project
    #[serde(default)]
    pub resolve_root: bool,

    /// Directories never expanded and never reported
    #[serde(default = "default_ignore_paths")]
    pub ignore_paths: Vec<String>,
}

impl Default for ResolverSection {
    fn default() -> Self {
        Self {
            resolve_root: false,
            ignore_paths: default_ignore_paths(),
        }
    }
}

fn default_ignore_paths() -> Vec<String> {
    vec![ROOT_MARKER.to_string()]
}

/// Include/exclude globs applied to changed files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct FilterSection {
    #[serde(default)]
    pub include: Vec<String>,

    #[serde(default)]
    pub exclude: Vec<String>,
}

/// Where changed files come from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ChangesSection {
    #[serde(default)]
    pub base_ref: Option<String>,

    #[serde(default)]
    pub head_ref: Option<String>,

    /// Explicit changed-file list; skips git entirely when non-empty
    #[serde(default)]
    pub files: Vec<String>,
}

/// Report format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputSection {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub resolver: ResolverSection,

    #[serde(default)]
    pub filter: FilterSection,

    #[serde(default)]
    pub changes: ChangesSection,

    #[serde(default)]
    pub output: OutputSection,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> AffectedResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> AffectedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load the project config (or `explicit`), then apply env overrides
    pub fn load_or_default(
        project_root: &Path,
        explicit: Option<&Path>,
    ) -> AffectedResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root, explicit)
    }

    /// Apply environment variable overrides (TFAFFECTED_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    /// Resolution engine settings; unparseable ignore entries are dropped.
    pub fn resolver_config(&self) -> ResolverConfig {
        ResolverConfig::default()
            .with_resolve_root(self.resolver.resolve_root)
            .with_ignored_path_strings(&self.resolver.ignore_paths)
    }
}
