// Tests for `speclint lint` output.
use super::common::{create_workspace, run_speclint, PETSTORE_YAML};

const BROKEN_YAML: &str = r#"
swagger: "2.0"
paths:
  /pets:
    get:
      operationId: listPets
    post:
      operationId: listPets
      tags: [pets]
"#;

const CONFIG: &str = "rules:\n  requireOperationTags: true\n  noDuplicateOperationIds: true\n";

#[test]
fn test_lint_prints_sorted_violation_lines() {
    let (_dir, root) = create_workspace(&[("api.yaml", BROKEN_YAML), ("speclint.yaml", CONFIG)]);
    let out = run_speclint(&root, &["lint", "api.yaml"]);
    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        r##"error "#/paths/~1pets/get" "requireOperationTags" operation "#/paths/~1pets/get" must have at least 1 tag"##
    );
    assert!(lines[1].starts_with(r##"error "#/paths/~1pets/post" "noDuplicateOperationIds""##));
    assert!(stdout.contains("2 error(s) in api.yaml"));
}

#[test]
fn test_lint_clean_document_says_so() {
    let (_dir, root) = create_workspace(&[("petstore.yaml", PETSTORE_YAML)]);
    let out = run_speclint(&root, &["lint", "petstore.yaml", "--config", "absent.yaml"]);
    // an explicit config path must exist
    assert_eq!(out.status.code(), Some(2));

    let out = run_speclint(&root, &["lint", "petstore.yaml"]);
    assert_eq!(out.status.code(), Some(0));
    assert_eq!(String::from_utf8_lossy(&out.stdout).trim(), "No errors found.");
}

#[test]
fn test_lint_json_output() {
    let (_dir, root) = create_workspace(&[("api.yaml", BROKEN_YAML), ("rules.yaml", CONFIG)]);
    let out = run_speclint(
        &root,
        &["--json", "lint", "api.yaml", "--config", "rules.yaml", "--parallel"],
    );
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["command"], "lint");
    assert_eq!(value["status"], "error");
    assert_eq!(value["violations"].as_array().map(Vec::len), Some(2));
    assert_eq!(value["violations"][0]["rule"], "requireOperationTags");
}

#[test]
fn test_lint_json_document() {
    let json = r#"{"swagger":"2.0","paths":{"/x/":{"get":{"operationId":"getX"}}}}"#;
    let (_dir, root) = create_workspace(&[
        ("api.json", json),
        ("speclint.yaml", "rules:\n  slashTerminatedPaths: false\n"),
    ]);
    let out = run_speclint(&root, &["lint", "api.json"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).contains(r##""#/paths/~1x~1" "slashTerminatedPaths""##));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let (_dir, root) = create_workspace(&[("api.yaml", BROKEN_YAML), ("speclint.yaml", CONFIG)]);
    let out = run_speclint(&root, &["--json", "--verbose", "lint", "api.yaml"]);
    // stdout stays parseable
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(value["document"], "api.yaml");
    assert!(String::from_utf8_lossy(&out.stderr).contains("rule finished"));
}
