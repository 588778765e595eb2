// Tests for CLI exit code behavior.
use super::common::{create_workspace, run_speclint, PETSTORE_YAML};

#[test]
/// Exit code 0 when no rule reports anything.
fn test_exit_code_0_clean() {
    let (_dir, root) = create_workspace(&[
        ("api.yaml", PETSTORE_YAML),
        ("speclint.yaml", "presets: [standard]\n"),
    ]);
    let out = run_speclint(&root, &["lint", "api.yaml"]);
    assert_eq!(out.status.code(), Some(0));
}

#[test]
/// Exit code 1 when violations are found.
fn test_exit_code_1_violations() {
    let (_dir, root) = create_workspace(&[
        ("api.yaml", "paths:\n  /a:\n    get: {}\n"),
        ("speclint.yaml", "rules:\n  noEmptyOperationId: true\n"),
    ]);
    let out = run_speclint(&root, &["lint", "api.yaml"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
/// Exit code 2 when the document does not exist.
fn test_exit_code_2_missing_document() {
    let (_dir, root) = create_workspace(&[]);
    let out = run_speclint(&root, &["lint", "nope.yaml"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("speclint lint:"));
}

#[test]
/// Exit code 2 when the document is not valid YAML.
fn test_exit_code_2_malformed_document() {
    let (_dir, root) = create_workspace(&[("api.yaml", "paths: [unclosed\n")]);
    let out = run_speclint(&root, &["lint", "api.yaml"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
/// Exit code 2 when the configuration cannot be parsed.
fn test_exit_code_2_bad_config() {
    let (_dir, root) = create_workspace(&[
        ("api.yaml", PETSTORE_YAML),
        ("speclint.yaml", "rules:\n  requireOperationTags: [not, a, bool]\n"),
    ]);
    let out = run_speclint(&root, &["lint", "api.yaml"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
/// Exit code 2 for an unknown naming convention, with nothing on stdout.
fn test_exit_code_2_unknown_convention() {
    let (_dir, root) = create_workspace(&[
        ("api.yaml", PETSTORE_YAML),
        ("speclint.yaml", "rules:\n  naming:\n    tags: SpongeCase\n"),
    ]);
    let out = run_speclint(&root, &["lint", "api.yaml"]);
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("SpongeCase"));
}

#[test]
/// Exit code 2 for an unsupported completion shell.
fn test_exit_code_2_unknown_shell() {
    let (_dir, root) = create_workspace(&[]);
    let out = run_speclint(&root, &["completion", "tcsh"]);
    assert_eq!(out.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("`tcsh`"));
    assert!(stderr.contains("powershell"));
    let out = run_speclint(&root, &["completion", "PS"]);
    assert_eq!(out.status.code(), Some(0));
    let out = run_speclint(&root, &["completion", "bash"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(String::from_utf8_lossy(&out.stdout).contains("speclint"));
}
