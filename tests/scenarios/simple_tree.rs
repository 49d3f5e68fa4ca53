//! Scenario: two services, one shared database module.

use crate::common::*;
use tfaffected::{DirPath, ResolverConfig};

#[test]
fn project_module_change_reaches_its_environment() {
    let result = resolve(SIMPLE, &["service-a/module/main.tf"]);
    assert_eq!(result, vec!["service-a/production"]);
}

#[test]
fn shared_module_change_reaches_only_its_users() {
    let result = resolve(SIMPLE, &["modules/database/main.tf"]);
    assert_eq!(result, vec!["service-a/production"]);
    assert_contains_none(&result, &["service-b/production"]);
}

#[test]
fn direct_project_change() {
    let result = resolve(SIMPLE, &["service-b/production/main.tf"]);
    assert_eq!(result, vec!["service-b/production"]);
}

#[test]
fn multiple_changed_modules() {
    let result = resolve(
        SIMPLE,
        &["service-a/module/main.tf", "service-b/module/main.tf"],
    );
    assert_same_set(&result, &["service-a/production", "service-b/production"]);
}

#[test]
fn several_files_in_one_project_report_it_once() {
    let result = resolve(
        SIMPLE,
        &[
            "service-a/production/main.tf",
            "service-a/production/provider.tf",
        ],
    );
    assert_eq!(result, vec!["service-a/production"]);
}

#[test]
fn root_file_is_ignored_by_default() {
    assert!(resolve(SIMPLE, &["README.md"]).is_empty());
}

#[test]
fn root_change_with_resolve_root_reports_every_project() {
    let config = ResolverConfig::default().with_resolve_root(true);
    let result = resolve_with(SIMPLE, &["README.md"], &config);
    assert_eq!(result, vec!["service-a/production", "service-b/production"]);
}

#[test]
fn ignored_referrer_is_not_reported() {
    let config = ResolverConfig::default().with_ignored_paths([
        DirPath::root(),
        DirPath::parse("service-a/production").unwrap(),
    ]);
    let result = resolve_with(SIMPLE, &["modules/database/main.tf"], &config);
    assert!(result.is_empty());
}

#[test]
fn mixed_changes_combine() {
    let result = resolve(
        SIMPLE,
        &[
            "README.md",
            "modules/database/outputs.tf",
            "service-b/production/main.tf",
        ],
    );
    assert_same_set(&result, &["service-a/production", "service-b/production"]);
}
