//! Scenario: services with per-environment directories over shared modules.

use crate::common::*;
use tfaffected::ResolverConfig;

const ALL_ENVIRONMENTS: &[&str] = &[
    "services/api-gateway/dev",
    "services/api-gateway/staging",
    "services/api-gateway/prod",
    "services/user-service/dev",
    "services/user-service/prod",
    "services/platform/dev",
    "services/platform/prod",
];

#[test]
fn vpc_change_reaches_every_service_environment() {
    let result = resolve(MICROSERVICES, &["modules/vpc/main.tf"]);
    assert_same_set(&result, ALL_ENVIRONMENTS);
    assert_contains_none(&result, &["global"]);
}

#[test]
fn eks_change_reaches_only_platform() {
    let result = resolve(MICROSERVICES, &["modules/eks-cluster/main.tf"]);
    assert_same_set(&result, &["services/platform/dev", "services/platform/prod"]);
}

#[test]
fn rds_change_reaches_only_user_service() {
    let result = resolve(MICROSERVICES, &["modules/rds/main.tf"]);
    assert_same_set(
        &result,
        &["services/user-service/dev", "services/user-service/prod"],
    );
}

#[test]
fn service_module_change_reaches_all_its_environments() {
    let result = resolve(MICROSERVICES, &["services/api-gateway/module/main.tf"]);
    assert_same_set(
        &result,
        &[
            "services/api-gateway/dev",
            "services/api-gateway/staging",
            "services/api-gateway/prod",
        ],
    );
}

#[test]
fn environment_change_stays_local() {
    let result = resolve(MICROSERVICES, &["services/user-service/prod/main.tf"]);
    assert_eq!(result, vec!["services/user-service/prod"]);
}

#[test]
fn global_is_a_standalone_project() {
    let result = resolve(MICROSERVICES, &["global/iam.tf"]);
    assert_eq!(result, vec!["global"]);
}

#[test]
fn every_project_under_resolve_root() {
    let config = ResolverConfig::default().with_resolve_root(true);
    let mut expected = ALL_ENVIRONMENTS.to_vec();
    expected.push("global");

    let result = resolve_with(MICROSERVICES, &["Makefile"], &config);
    assert_same_set(&result, &expected);
}

#[test]
fn trace_explains_environment_via_service_module() {
    let store = memory_store(MICROSERVICES);
    let resolution = tfaffected::resolve_affected_projects(
        &store,
        &["modules/eks-cluster/main.tf"],
        &ResolverConfig::default(),
    );
    let trace = &resolution.trace;

    assert_eq!(
        trace.dependency_chain("services/platform/module"),
        vec!["module_dependency: services/platform/module"]
    );
    assert_eq!(
        trace.dependency_chain("services/platform/prod"),
        vec!["project_dependency: services/platform/prod"]
    );
}
