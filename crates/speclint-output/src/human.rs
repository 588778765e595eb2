use crate::OutputFormatter;
use speclint_enforce::types::{LintResult, RulesResult, Violation};

pub struct HumanFormatter;

/// `error "<reference>" "<rule>" <message>`
pub fn format_violation_human(v: &Violation) -> String {
    format!("error \"{}\" \"{}\" {}\n", v.reference, v.rule, v.message)
}

impl OutputFormatter for HumanFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        if result.violations.is_empty() {
            return "No errors found.\n".to_string();
        }

        let mut out = String::new();
        for v in &result.violations {
            out.push_str(&format_violation_human(v));
        }
        out.push_str(&format!(
            "\n{} error(s) in {} ({} rule(s) run)\n",
            result.violations.len(),
            result.document,
            result.rules_run.len(),
        ));
        out
    }

    fn format_rules(&self, result: &RulesResult) -> String {
        let width = result.rules.iter().map(|r| r.name.len()).max().unwrap_or(0);
        let mut out = String::new();
        for r in &result.rules {
            let marker = if r.enabled { "on " } else { "off" };
            out.push_str(&format!(
                "{marker} {:<width$}  {}\n",
                r.name,
                r.summary,
                width = width
            ));
        }
        out
    }
}
