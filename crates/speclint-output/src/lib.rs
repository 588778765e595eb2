//! Output formatters for speclint command results.
//!
//! Provides two output modes:
//! - **Human** (default): one line per violation, sorted by reference
//! - **JSON** (`--json`): machine-readable structured output

pub mod human;
pub mod json;

use speclint_enforce::types::{LintResult, RulesResult};

pub trait OutputFormatter {
    fn format_lint(&self, result: &LintResult) -> String;
    fn format_rules(&self, result: &RulesResult) -> String;
}
