use crate::OutputFormatter;
use speclint_enforce::types::{LintResult, RulesResult};

pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
    fn format_rules(&self, result: &RulesResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_default()
    }
}
