// Rules never observe each other: order and concurrency do not change results.
use speclint_core::Rules;
use speclint_enforce::engine::{builtin_rules, LintEngine};

use super::common::generators::generate_document;
use super::common::{yaml_config, yaml_document};

const ALL_RULES: &str = r#"
rules:
  naming:
    paths: kebab-case
    operations: camelCase
    definitions: PascalCase
    properties: camelCase
  noEmptyOperationId: true
  noEmptyDescriptions: {}
  slashTerminatedPaths: false
  requireOperationTags: true
  noUnusedDefinitions: true
  noDuplicateOperationIds: true
  noMissingRequiredProperties: true
"#;

fn rules() -> Rules {
    yaml_config(ALL_RULES).rules
}

#[test]
fn test_parallel_matches_sequential() {
    let document = yaml_document(&generate_document(60, 20));
    let rules = rules();

    let sequential = LintEngine::new().lint(&document, &rules, "gen").unwrap();
    let parallel = LintEngine::new()
        .parallel(true)
        .lint(&document, &rules, "gen")
        .unwrap();

    assert!(!sequential.violations.is_empty());
    assert_eq!(sequential.violations, parallel.violations);
    assert_eq!(sequential.rules_run, parallel.rules_run);
}

#[test]
fn test_reversed_rule_order_same_result() {
    let document = yaml_document(&generate_document(25, 9));
    let rules = rules();

    let mut reversed = builtin_rules();
    reversed.reverse();

    let forward = LintEngine::new().lint(&document, &rules, "gen").unwrap();
    let backward = LintEngine::with_rules(reversed)
        .lint(&document, &rules, "gen")
        .unwrap();
    assert_eq!(forward.violations, backward.violations);
}

#[test]
fn test_linting_twice_is_idempotent() {
    let document = yaml_document(&generate_document(10, 8));
    let rules = rules();
    let engine = LintEngine::new().parallel(true);
    let first = engine.lint(&document, &rules, "gen").unwrap();
    let second = engine.lint(&document, &rules, "gen").unwrap();
    assert_eq!(first.violations, second.violations);
}

#[test]
fn test_generated_document_problem_counts() {
    // 10 paths, 20 operations, 8 definitions
    let document = yaml_document(&generate_document(10, 8));
    let result = LintEngine::new().lint(&document, &rules(), "gen").unwrap();
    let count = |rule: &str| result.violations.iter().filter(|v| v.rule == rule).count();

    // operations 0, 5, 10, 15 have no tags
    assert_eq!(count("requireOperationTags"), 4);
    // paths 0, 3, 6, 9 end with a slash
    assert_eq!(count("slashTerminatedPaths"), 4);
    // Model0 and Model7 are never referenced
    assert_eq!(count("noUnusedDefinitions"), 2);
    // every definition requires a missing property
    assert_eq!(count("noMissingRequiredProperties"), 8);
    // display_name breaks camelCase and has no description
    assert_eq!(count("naming"), 8);
    assert_eq!(count("noEmptyDescriptions"), 8 + 20);
    assert_eq!(count("noDuplicateOperationIds"), 0);
    assert_eq!(count("noEmptyOperationId"), 0);
}
