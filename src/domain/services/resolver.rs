//! Affected project resolver
//!
//! Turns a set of changed files into the set of deployable project directories
//! they affect. The reference graph is never materialized: each directory is
//! classified and expanded on demand from the file store, driven by an explicit
//! LIFO worklist with a visited set, so cycles terminate and depth is bounded
//! by memory rather than the call stack.

use std::collections::HashSet;

use crate::domain::ports::FileStore;
use crate::domain::services::classifier::{classify, is_inside_module_tree, DirectoryRole};
use crate::domain::services::reference_extractor::{unique_in_order, ReferenceExtractor};
use crate::domain::services::trace::{ResolutionTrace, StepAction};
use crate::domain::value_objects::DirPath;

/// File whose presence marks a directory as a first-class project.
pub const PROVIDER_FILE: &str = "provider.tf";

const MODULE_TREE_EXCLUDES: &[&str] = &["**/module/**", "**/modules/**"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// A change at the tree root affects every project.
    pub resolve_root: bool,
    /// Directories that are never expanded and never reported.
    pub ignored_paths: Vec<DirPath>,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            resolve_root: false,
            ignored_paths: vec![DirPath::root()],
        }
    }
}

impl ResolverConfig {
    pub fn with_resolve_root(mut self, resolve_root: bool) -> Self {
        self.resolve_root = resolve_root;
        self
    }

    pub fn with_ignored_paths(mut self, paths: impl IntoIterator<Item = DirPath>) -> Self {
        self.ignored_paths = paths.into_iter().collect();
        self
    }

    /// Parse raw ignore entries; entries outside the tree are dropped with a warning.
    pub fn with_ignored_path_strings<S: AsRef<str>>(self, raw: &[S]) -> Self {
        let paths = raw.iter().filter_map(|entry| {
            let parsed = DirPath::parse(entry.as_ref());
            if parsed.is_none() {
                tracing::warn!(path = entry.as_ref(), "ignoring ignore-path outside the tree");
            }
            parsed
        });
        self.with_ignored_paths(paths.collect::<Vec<_>>())
    }

    pub fn is_ignored(&self, dir: &DirPath) -> bool {
        self.ignored_paths.contains(dir)
    }
}

/// Outcome of one resolution call.
#[derive(Debug, Clone)]
pub struct Resolution {
    /// Affected project directories, duplicate-free, in first-discovery order.
    pub directories: Vec<DirPath>,
    pub trace: ResolutionTrace,
}

impl Resolution {
    pub fn directory_names(&self) -> Vec<String> {
        self.directories.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Default)]
struct AffectedSet {
    order: Vec<DirPath>,
    members: HashSet<DirPath>,
}

impl AffectedSet {
    fn insert(&mut self, dir: DirPath) {
        if self.members.insert(dir.clone()) {
            self.order.push(dir);
        }
    }

    fn into_vec(self) -> Vec<DirPath> {
        self.order
    }
}

pub struct ProjectResolver<'a, S: FileStore + ?Sized> {
    store: &'a S,
}

impl<'a, S: FileStore + ?Sized> ProjectResolver<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Resolve the project directories affected by `changed_files`.
    ///
    /// Never fails: store errors are logged and treated as "no references".
    pub fn resolve_affected_projects<F: AsRef<str>>(
        &self,
        changed_files: &[F],
        config: &ResolverConfig,
    ) -> Resolution {
        let mut trace = ResolutionTrace::new();
        let extractor = ReferenceExtractor::new(self.store);

        let changed_dirs = unique_in_order(changed_files.iter().filter_map(|file| {
            let dir = DirPath::parent_of_file(file.as_ref());
            if dir.is_none() {
                tracing::debug!(file = file.as_ref(), "skipping changed file outside the tree");
            }
            dir
        }));
        trace.record(StepAction::Discovered, &changed_dirs);

        let mut worklist = changed_dirs;
        let mut visited: HashSet<DirPath> = HashSet::new();
        let mut affected = AffectedSet::default();

        while let Some(dir) = worklist.pop() {
            if !visited.insert(dir.clone()) {
                continue;
            }

            if dir.is_root() && config.resolve_root {
                tracing::debug!("root directory changed; every project is affected");
                let directories = self.all_projects(config);
                trace.log_debug();
                return Resolution { directories, trace };
            }

            if config.is_ignored(&dir) {
                tracing::trace!(dir = %dir, "ignored");
                continue;
            }

            let role = classify(&dir);
            tracing::trace!(dir = %dir, role = %role, "classified");

            match role {
                DirectoryRole::SharedModule => {
                    let dependents = extractor.directories_mentioning(&dir);
                    trace.record(StepAction::ModuleDependency, &dependents);
                    worklist.extend(dependents.into_iter().filter(|d| !visited.contains(d)));
                }
                DirectoryRole::ProjectModule => {
                    let referencing = extractor.directories_declaring(&dir);
                    trace.record(StepAction::ProjectDependency, &referencing);
                    for referrer in referencing {
                        if config.is_ignored(&referrer) {
                            continue;
                        }
                        if classify(&referrer).is_terminal() {
                            affected.insert(referrer);
                        } else if !visited.contains(&referrer) {
                            // a module referencing a project module keeps the chain going
                            worklist.push(referrer);
                        }
                    }
                }
                DirectoryRole::Project => {
                    trace.record(StepAction::DirectProject, [&dir]);
                    affected.insert(dir);
                }
            }
        }

        trace.log_debug();
        Resolution {
            directories: affected.into_vec(),
            trace,
        }
    }

    /// Every directory holding a provider declaration, outside module trees
    /// and not ignored.
    pub fn all_projects(&self, config: &ResolverConfig) -> Vec<DirPath> {
        let provider_files = match self.store.find_files(PROVIDER_FILE, MODULE_TREE_EXCLUDES) {
            Ok(files) => files,
            Err(e) => {
                tracing::warn!(error = %e, "provider discovery failed; no projects found");
                return Vec::new();
            }
        };

        unique_in_order(
            provider_files
                .iter()
                .filter_map(|file| DirPath::parent_of_file(file))
                .filter(|dir| !is_inside_module_tree(dir) && !config.is_ignored(dir)),
        )
    }
}

/// Convenience entry point over any file store.
pub fn resolve_affected_projects<S: FileStore + ?Sized, F: AsRef<str>>(
    store: &S,
    changed_files: &[F],
    config: &ResolverConfig,
) -> Resolution {
    ProjectResolver::new(store).resolve_affected_projects(changed_files, config)
}
