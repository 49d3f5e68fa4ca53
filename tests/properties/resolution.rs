//! Property tests for the resolution engine over randomly generated trees.

use std::collections::BTreeSet;

use proptest::prelude::*;

use tfaffected::{
    classify, resolve_affected_projects, DirPath, DirectoryRole, MemoryFileStore, ResolverConfig,
};

/// A generated monorepo: shared modules (possibly cyclic), services with a
/// project module and environments, and standalone apps.
#[derive(Debug, Clone)]
struct Layout {
    files: Vec<(String, String)>,
}

impl Layout {
    fn store(&self) -> MemoryFileStore {
        MemoryFileStore::from_files(self.files.iter().map(|(p, c)| (p.as_str(), c.as_str())))
    }

    fn paths(&self) -> Vec<String> {
        self.files.iter().map(|(p, _)| p.clone()).collect()
    }
}

fn module_block(name: &str, source: &str) -> String {
    format!("module \"{}\" {{\n  source = \"{}\"\n}}\n", name, source)
}

fn layout() -> impl Strategy<Value = Layout> {
    // at most nine shared modules so `modules/m1` never prefixes another name
    (
        1usize..=9,
        proptest::collection::vec((0usize..9, 0usize..9), 0..12),
        proptest::collection::vec((proptest::collection::vec(0usize..9, 0..3), 1usize..=3), 0..=4),
        proptest::collection::vec(proptest::collection::vec(0usize..9, 0..3), 0..=3),
    )
        .prop_map(|(shared, cross, services, apps)| {
            let mut files = vec![("README.md".to_string(), "# infra\n".to_string())];

            for m in 0..shared {
                let mut content = "resource \"null_resource\" \"this\" {}\n".to_string();
                for (a, b) in &cross {
                    if a % shared == m {
                        content.push_str(&module_block("dep", &format!("../../modules/m{}", b % shared)));
                    }
                }
                files.push((format!("modules/m{}/main.tf", m), content));
            }

            for (j, (uses, envs)) in services.iter().enumerate() {
                let content: String = uses
                    .iter()
                    .map(|b| module_block("shared", &format!("../../modules/m{}", b % shared)))
                    .collect();
                files.push((format!("svc{}/module/main.tf", j), content));
                for e in 0..*envs {
                    files.push((
                        format!("svc{}/env{}/main.tf", j, e),
                        module_block("svc", "../module"),
                    ));
                    files.push((format!("svc{}/env{}/provider.tf", j, e), String::new()));
                }
            }

            for (k, uses) in apps.iter().enumerate() {
                let content: String = uses
                    .iter()
                    .map(|b| module_block("shared", &format!("../modules/m{}", b % shared)))
                    .collect();
                files.push((format!("app{}/main.tf", k), content));
                files.push((format!("app{}/provider.tf", k), String::new()));
            }

            Layout { files }
        })
}

fn layout_with_changes() -> impl Strategy<Value = (Layout, Vec<String>)> {
    layout().prop_flat_map(|layout| {
        let paths = layout.paths();
        let changes = proptest::sample::subsequence(paths.clone(), 0..=paths.len().min(6));
        (Just(layout), changes)
    })
}

fn layout_with_two_change_sets() -> impl Strategy<Value = (Layout, Vec<String>, Vec<String>)> {
    layout().prop_flat_map(|layout| {
        let paths = layout.paths();
        let max = paths.len().min(4);
        let a = proptest::sample::subsequence(paths.clone(), 0..=max);
        let b = proptest::sample::subsequence(paths, 0..=max);
        (Just(layout), a, b)
    })
}

fn resolve_set(store: &MemoryFileStore, changed: &[String]) -> BTreeSet<String> {
    resolve_affected_projects(store, changed, &ResolverConfig::default())
        .directory_names()
        .into_iter()
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Resolution is deterministic.
    #[test]
    fn property_idempotent((layout, changed) in layout_with_changes()) {
        let store = layout.store();
        let config = ResolverConfig::default();
        let first = resolve_affected_projects(&store, &changed, &config).directory_names();
        let second = resolve_affected_projects(&store, &changed, &config).directory_names();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: The affected set does not depend on the order of changed files.
    #[test]
    fn property_order_independent((layout, changed) in layout_with_changes()) {
        let store = layout.store();
        let mut reversed = changed.clone();
        reversed.reverse();
        prop_assert_eq!(resolve_set(&store, &changed), resolve_set(&store, &reversed));
    }

    /// PROPERTY: No directory is reported twice.
    #[test]
    fn property_no_duplicates((layout, changed) in layout_with_changes()) {
        let store = layout.store();
        let names = resolve_affected_projects(&store, &changed, &ResolverConfig::default())
            .directory_names();
        let unique: BTreeSet<_> = names.iter().collect();
        prop_assert_eq!(unique.len(), names.len());
    }

    /// PROPERTY: Every reported directory is a project that is neither ignored nor the root.
    #[test]
    fn property_results_are_projects((layout, changed) in layout_with_changes()) {
        let store = layout.store();
        let config = ResolverConfig::default();
        let resolution = resolve_affected_projects(&store, &changed, &config);
        for dir in &resolution.directories {
            prop_assert_eq!(classify(dir), DirectoryRole::Project);
            prop_assert!(!dir.is_root());
            prop_assert!(!config.is_ignored(dir));
        }
    }

    /// PROPERTY: Resolving two change sets together equals the union of resolving each.
    #[test]
    fn property_union((layout, a, b) in layout_with_two_change_sets()) {
        let store = layout.store();
        let both: Vec<String> = a.iter().chain(b.iter()).cloned().collect();
        let mut expected = resolve_set(&store, &a);
        expected.extend(resolve_set(&store, &b));
        prop_assert_eq!(resolve_set(&store, &both), expected);
    }

    /// PROPERTY: Cyclic module references terminate and stay within the project inventory.
    #[test]
    fn property_terminates_within_inventory((layout, changed) in layout_with_changes()) {
        let store = layout.store();
        let projects: BTreeSet<DirPath> = layout
            .paths()
            .iter()
            .filter(|p| p.ends_with("/provider.tf"))
            .filter_map(|p| DirPath::parent_of_file(p))
            .collect();
        let resolution = resolve_affected_projects(&store, &changed, &ResolverConfig::default());
        for dir in &resolution.directories {
            prop_assert!(projects.contains(dir), "{} is not a project", dir);
        }
    }

    /// PROPERTY: With root resolution on, a root change reports every project.
    #[test]
    fn property_root_change_reports_inventory(layout in layout()) {
        let store = layout.store();
        let config = ResolverConfig::default().with_resolve_root(true);
        let reported: BTreeSet<String> = resolve_affected_projects(&store, &["README.md"], &config)
            .directory_names()
            .into_iter()
            .collect();
        let projects: BTreeSet<String> = layout
            .paths()
            .iter()
            .filter(|p| p.ends_with("/provider.tf"))
            .filter_map(|p| DirPath::parent_of_file(p))
            .map(|d| d.to_string())
            .collect();
        prop_assert_eq!(reported, projects);
    }
}
