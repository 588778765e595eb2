use std::collections::BTreeSet;

use rayon::prelude::*;
use speclint_core::config::Rules;
use speclint_core::Document;
use speclint_parsers::references::reachable_definitions;

use crate::report::Report;
use crate::rules::{self, NamingChecks, RuleContext};
use crate::types::{LintResult, RuleError, RuleInfo, RulesResult};

pub type RuleFn = fn(&RuleContext<'_>) -> Result<(), RuleError>;

/// Registry entry for one rule.
#[derive(Clone, Copy)]
pub struct RuleDescriptor {
    /// Configuration key, also used as the violation's rule name.
    pub name: &'static str,
    pub summary: &'static str,
    pub is_enabled: fn(&Rules) -> bool,
    pub run: RuleFn,
}

impl std::fmt::Debug for RuleDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleDescriptor")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// Every built-in rule, in execution order.
pub fn builtin_rules() -> Vec<RuleDescriptor> {
    vec![
        RuleDescriptor {
            name: rules::NAMING,
            summary: "names follow the configured convention per category",
            is_enabled: |r| r.naming.is_some(),
            run: rules::naming,
        },
        RuleDescriptor {
            name: rules::REQUIRE_OPERATION_TAGS,
            summary: "every operation has at least one tag",
            is_enabled: |r| r.require_operation_tags == Some(true),
            run: rules::require_operation_tags,
        },
        RuleDescriptor {
            name: rules::NO_EMPTY_OPERATION_ID,
            summary: "every operation has an operationId",
            is_enabled: |r| r.no_empty_operation_id == Some(true),
            run: rules::no_empty_operation_id,
        },
        RuleDescriptor {
            name: rules::NO_EMPTY_DESCRIPTIONS,
            summary: "operations, parameters and properties have descriptions",
            is_enabled: |r| r.no_empty_descriptions.is_some(),
            run: rules::no_empty_descriptions,
        },
        RuleDescriptor {
            name: rules::SLASH_TERMINATED_PATHS,
            summary: "path templates follow the trailing-slash policy",
            is_enabled: |r| r.slash_terminated_paths.is_some(),
            run: rules::slash_terminated_paths,
        },
        RuleDescriptor {
            name: rules::NO_UNUSED_DEFINITIONS,
            summary: "every definition is reachable from an operation",
            is_enabled: |r| r.no_unused_definitions == Some(true),
            run: rules::no_unused_definitions,
        },
        RuleDescriptor {
            name: rules::NO_DUPLICATE_OPERATION_IDS,
            summary: "operationIds are unique",
            is_enabled: |r| r.no_duplicate_operation_ids == Some(true),
            run: rules::no_duplicate_operation_ids,
        },
        RuleDescriptor {
            name: rules::NO_MISSING_REQUIRED_PROPERTIES,
            summary: "required property names exist under properties",
            is_enabled: |r| r.no_missing_required_properties == Some(true),
            run: rules::no_missing_required_properties,
        },
    ]
}

/// Reject configuration that would otherwise disable a check silently.
pub fn validate_config(rules: &Rules) -> Result<(), RuleError> {
    if let Some(naming) = &rules.naming {
        NamingChecks::resolve(naming)?;
    }
    Ok(())
}

/// Runs a rule list against a document.
#[derive(Debug, Clone)]
pub struct LintEngine {
    rules: Vec<RuleDescriptor>,
    parallel: bool,
}

impl Default for LintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl LintEngine {
    pub fn new() -> Self {
        Self::with_rules(builtin_rules())
    }

    pub fn with_rules(rules: Vec<RuleDescriptor>) -> Self {
        Self {
            rules,
            parallel: false,
        }
    }

    /// Run each rule as its own task on the rayon pool.
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn rules(&self) -> &[RuleDescriptor] {
        &self.rules
    }

    /// Names of the rules `config` turns on, in registry order.
    pub fn enabled_rules(&self, config: &Rules) -> Vec<&'static str> {
        self.rules
            .iter()
            .filter(|r| (r.is_enabled)(config))
            .map(|r| r.name)
            .collect()
    }

    /// Every registered rule with whether `config` turns it on.
    pub fn describe(&self, config: &Rules) -> RulesResult {
        RulesResult::new(
            self.rules
                .iter()
                .map(|r| RuleInfo {
                    name: r.name.to_string(),
                    summary: r.summary.to_string(),
                    enabled: (r.is_enabled)(config),
                })
                .collect(),
        )
    }

    /// Validate the configuration, then run every enabled rule against the
    /// context. Sequential and parallel runs produce the same violations;
    /// only their order in the report differs.
    pub fn run(&self, ctx: &RuleContext<'_>) -> Result<(), RuleError> {
        validate_config(ctx.rules)?;

        let enabled: Vec<&RuleDescriptor> = self
            .rules
            .iter()
            .filter(|rule| {
                let on = (rule.is_enabled)(ctx.rules);
                if !on {
                    tracing::debug!(rule = rule.name, "rule not configured, skipping");
                }
                on
            })
            .collect();

        if self.parallel {
            enabled
                .par_iter()
                .try_for_each(|rule| Self::run_rule(rule, ctx))
        } else {
            enabled
                .iter()
                .try_for_each(|rule| Self::run_rule(rule, ctx))
        }
    }

    fn run_rule(rule: &RuleDescriptor, ctx: &RuleContext<'_>) -> Result<(), RuleError> {
        let before = ctx.report.len();
        (rule.run)(ctx)?;
        tracing::debug!(
            rule = rule.name,
            violations = ctx.report.len().saturating_sub(before),
            "rule finished"
        );
        Ok(())
    }

    /// Lint a whole document: compute reachable definitions, run the
    /// enabled rules into a fresh report, and package the sorted result.
    pub fn lint(
        &self,
        document: &Document,
        config: &Rules,
        document_name: &str,
    ) -> Result<LintResult, RuleError> {
        let reachable: BTreeSet<String> = reachable_definitions(document);
        let report = Report::new();
        let ctx = RuleContext {
            rules: config,
            document,
            reachable_definitions: &reachable,
            report: &report,
        };
        self.run(&ctx)?;

        let rules_run = self
            .enabled_rules(config)
            .into_iter()
            .map(String::from)
            .collect();
        let result = LintResult::new(document_name, rules_run, report.into_violations());
        tracing::debug!(
            document = document_name,
            violations = result.violations.len(),
            "lint finished"
        );
        Ok(result)
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
