//! Configuration loading and environment overrides

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{AffectedError, AffectedResult};

use super::types::{Config, OutputFormat};

/// File name of the project config, looked up at the tree root.
pub const CONFIG_FILE_NAME: &str = ".tfaffected.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> AffectedResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| AffectedError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load `explicit` (which must exist) or the project config at `project_root`
/// (defaults when absent), then apply env overrides.
pub fn load_or_default(
    project_root: &Path,
    explicit: Option<&Path>,
) -> AffectedResult<(Config, Vec<ConfigWarning>)> {
    let (config, warnings) = match explicit {
        Some(path) => load_with_warnings(path)?,
        None => {
            let project_config = project_root.join(CONFIG_FILE_NAME);
            if project_config.is_file() {
                load_with_warnings(&project_config)?
            } else {
                (Config::default(), Vec::new())
            }
        }
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (TFAFFECTED_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides read through `lookup`.
pub fn with_env_overrides_from<L>(mut config: Config, lookup: L) -> Config
where
    L: Fn(&str) -> Option<String>,
{
    // TFAFFECTED_RESOLVE_ROOT
    if let Some(value) = lookup("TFAFFECTED_RESOLVE_ROOT") {
        match parse_bool(&value) {
            Some(flag) => config.resolver.resolve_root = flag,
            None => tracing::warn!(
                value = %value,
                "TFAFFECTED_RESOLVE_ROOT is not a boolean, keeping {}",
                config.resolver.resolve_root
            ),
        }
    }

    // TFAFFECTED_IGNORE_PATHS
    if let Some(value) = lookup("TFAFFECTED_IGNORE_PATHS") {
        config.resolver.ignore_paths = parse_list(&value);
    }

    // TFAFFECTED_FILES / TFAFFECTED_FILES_IGNORE (filter globs)
    if let Some(value) = lookup("TFAFFECTED_FILES") {
        config.filter.include = parse_list(&value);
    }
    if let Some(value) = lookup("TFAFFECTED_FILES_IGNORE") {
        config.filter.exclude = parse_list(&value);
    }

    // TFAFFECTED_CHANGED_FILES
    if let Some(value) = lookup("TFAFFECTED_CHANGED_FILES") {
        config.changes.files = parse_list(&value);
    }

    // TFAFFECTED_BASE_REF / TFAFFECTED_HEAD_REF
    if let Some(value) = lookup("TFAFFECTED_BASE_REF").filter(|v| !v.trim().is_empty()) {
        config.changes.base_ref = Some(value.trim().to_string());
    }
    if let Some(value) = lookup("TFAFFECTED_HEAD_REF").filter(|v| !v.trim().is_empty()) {
        config.changes.head_ref = Some(value.trim().to_string());
    }

    // TFAFFECTED_OUTPUT_FORMAT
    if let Some(value) = lookup("TFAFFECTED_OUTPUT_FORMAT") {
        match OutputFormat::parse(&value) {
            Some(format) => config.output.format = format,
            None => tracing::warn!(value = %value, "unknown TFAFFECTED_OUTPUT_FORMAT, ignoring"),
        }
    }

    config
}

/// Split a comma or newline separated list, dropping blank entries.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split([',', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "resolver",
        "resolve_root",
        "ignore_paths",
        "filter",
        "include",
        "exclude",
        "changes",
        "base_ref",
        "head_ref",
        "files",
        "output",
        "format",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
