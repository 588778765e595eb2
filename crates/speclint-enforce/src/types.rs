use serde::{Deserialize, Serialize};

/// One rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Violation {
    pub rule: String,
    /// Pointer to the offending node; empty when the node has no address.
    pub reference: String,
    pub message: String,
}

impl Violation {
    pub fn new(rule: &str, reference: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            reference: reference.into(),
            message: message.into(),
        }
    }
}

/// Outcome of linting one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintResult {
    pub version: String,
    pub command: String,
    pub status: String, // "ok" | "error"
    pub document: String,
    pub rules_run: Vec<String>,
    pub violations: Vec<Violation>,
}

impl LintResult {
    /// Build a result, ordering violations by reference, then rule, then message.
    pub fn new(document: &str, rules_run: Vec<String>, mut violations: Vec<Violation>) -> Self {
        violations.sort_by(|a, b| {
            (&a.reference, &a.rule, &a.message).cmp(&(&b.reference, &b.rule, &b.message))
        });
        let status = if violations.is_empty() { "ok" } else { "error" };
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "lint".to_string(),
            status: status.to_string(),
            document: document.to_string(),
            rules_run,
            violations,
        }
    }

    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// One entry of the `rules` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleInfo {
    pub name: String,
    pub summary: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesResult {
    pub version: String,
    pub command: String,
    pub rules: Vec<RuleInfo>,
}

impl RulesResult {
    pub fn new(rules: Vec<RuleInfo>) -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            command: "rules".to_string(),
            rules,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error(
        "rule `{rule}`: unknown naming convention `{convention}` for {category} (expected one of: {expected})"
    )]
    UnknownConvention {
        rule: &'static str,
        category: &'static str,
        convention: String,
        expected: String,
    },
}
