//! Reference extractor
//!
//! Finds the directories that reference a module directory. Two strategies:
//!
//! - broad: any `.tf` file whose raw content contains the module path
//!   (used for shared modules, referenced through many relative spellings)
//! - precise: parse `source = "..."` declarations and compare canonical
//!   paths (used for project modules)
//!
//! Unreadable files count as "no reference"; neither strategy fails.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

use crate::domain::ports::FileStore;
use crate::domain::value_objects::DirPath;

/// Glob selecting infrastructure files anywhere in the tree.
pub const INFRA_FILE_GLOB: &str = "**/*.tf";

/// Base-name pattern for infrastructure files.
pub const INFRA_FILE_PATTERN: &str = "*.tf";

static SOURCE_DECLARATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"source\s*=\s*"([^"]+)""#).expect("source pattern is valid"));

/// A `source` declaration found in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleReference {
    pub declaring_file: String,
    pub source: String,
}

impl ModuleReference {
    /// Canonical directory the declaration points at.
    ///
    /// `None` for remote sources and for paths leaving the tree.
    pub fn resolve(&self) -> Option<DirPath> {
        if is_remote_source(&self.source) {
            return None;
        }
        DirPath::parent_of_file(&self.declaring_file)?.join_relative(&self.source)
    }
}

/// Every `source = "<value>"` declaration in `content`, in order of appearance.
pub fn extract_module_references(declaring_file: &str, content: &str) -> Vec<ModuleReference> {
    SOURCE_DECLARATION
        .captures_iter(content)
        .map(|caps| ModuleReference {
            declaring_file: declaring_file.to_string(),
            source: caps[1].to_string(),
        })
        .collect()
}

fn is_remote_source(source: &str) -> bool {
    source.contains("::") || source.contains("://")
}

pub struct ReferenceExtractor<'a, S: FileStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: FileStore + ?Sized> ReferenceExtractor<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Broad content search: directories of infrastructure files whose content
    /// contains the module's path string.
    pub fn directories_mentioning(&self, module: &DirPath) -> Vec<DirPath> {
        let needle = module.to_string();
        let files = match self
            .store
            .search_file_contents(&needle, Some(INFRA_FILE_GLOB), false)
        {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(module = %module, error = %e, "content search failed; treating as no references");
                return Vec::new();
            }
        };

        unique_in_order(files.iter().filter_map(|f| DirPath::parent_of_file(f)))
    }

    /// Precise declaration search: directories containing a file whose `source`
    /// resolves to exactly `module`. Files inside `module` itself are skipped.
    pub fn directories_declaring(&self, module: &DirPath) -> Vec<DirPath> {
        let files = match self.store.find_files(INFRA_FILE_PATTERN, &[]) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(module = %module, error = %e, "file discovery failed; treating as no references");
                return Vec::new();
            }
        };

        let referencing: Vec<DirPath> = files
            .par_iter()
            .filter_map(|file| {
                let dir = DirPath::parent_of_file(file)?;
                if &dir == module {
                    return None;
                }
                let content = match self.store.read_file(file) {
                    Ok(content) => content,
                    Err(e) => {
                        tracing::trace!(file = %file, error = %e, "skipping unreadable file");
                        return None;
                    }
                };
                extract_module_references(file, &content)
                    .iter()
                    .any(|reference| reference.resolve().as_ref() == Some(module))
                    .then_some(dir)
            })
            .collect();

        unique_in_order(referencing)
    }
}

pub(crate) fn unique_in_order(dirs: impl IntoIterator<Item = DirPath>) -> Vec<DirPath> {
    let mut seen = HashSet::new();
    dirs.into_iter()
        .filter(|dir| seen.insert(dir.clone()))
        .collect()
}
