//! Scenario: GCP organization with `_modules/` and nested subdomains.

use crate::common::*;
use tfaffected::ResolverConfig;

#[test]
fn shared_project_module_reaches_every_domain() {
    let result = resolve(MULTI_DOMAIN, &["_modules/project/main.tf"]);
    assert_contains_all(
        &result,
        &[
            "domain-A",
            "domain-B",
            "domain-B/subdomain-I",
            "domain-B/subdomain-II",
        ],
    );
    assert_contains_none(&result, &["infrastructure"]);
}

#[test]
fn folder_module_reaches_infrastructure_too() {
    let result = resolve(MULTI_DOMAIN, &["_modules/multi-env-projects/folder.tf"]);
    assert_same_set(
        &result,
        &[
            "domain-A",
            "domain-B",
            "domain-B/subdomain-I",
            "domain-B/subdomain-II",
            "infrastructure",
        ],
    );
}

#[test]
fn subdomain_change_stays_local() {
    let result = resolve(MULTI_DOMAIN, &["domain-B/subdomain-I/project1.tf"]);
    assert_eq!(result, vec!["domain-B/subdomain-I"]);
    assert_contains_none(&result, &["domain-B/subdomain-II", "domain-A", "domain-B"]);
}

#[test]
fn infrastructure_is_a_standalone_project() {
    let result = resolve(MULTI_DOMAIN, &["infrastructure/terraform-states.tf"]);
    assert_eq!(result, vec!["infrastructure"]);
}

#[test]
fn organization_root_files_are_ignored() {
    let result = resolve(MULTI_DOMAIN, &["organization.tf", "billing_accounts.tf"]);
    assert!(result.is_empty());
}

#[test]
fn root_change_with_resolve_root_skips_modules_and_root() {
    let config = ResolverConfig::default().with_resolve_root(true);
    let result = resolve_with(MULTI_DOMAIN, &["provider.tf"], &config);
    assert_eq!(
        result,
        vec![
            "domain-A",
            "domain-B",
            "domain-B/subdomain-I",
            "domain-B/subdomain-II",
            "infrastructure",
        ]
    );
}
