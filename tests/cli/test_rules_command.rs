// Tests for `speclint rules`.
use super::common::{create_workspace, run_speclint};

#[test]
fn test_rules_lists_every_rule() {
    let (_dir, root) = create_workspace(&[]);
    let out = run_speclint(&root, &["rules"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout.lines().count(), 8);
    assert!(stdout.lines().all(|l| l.starts_with("off ")));
}

#[test]
fn test_rules_reflects_presets() {
    let (_dir, root) = create_workspace(&[("speclint.yaml", "presets: [standard]\n")]);
    let out = run_speclint(&root, &["--json", "rules"]);
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let enabled: Vec<&str> = value["rules"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|r| r["enabled"] == true)
        .filter_map(|r| r["name"].as_str())
        .collect();
    assert_eq!(
        enabled,
        vec![
            "naming",
            "requireOperationTags",
            "noEmptyOperationId",
            "noEmptyDescriptions"
        ]
    );
}
