//! Built-in rules.
//!
//! Every rule takes the shared [`RuleContext`], returns immediately when its
//! configuration entry is unset, and otherwise performs one full walk of the
//! document, appending a violation for each failing node.

use std::collections::{BTreeSet, HashMap};

use speclint_core::config::NamingOptions;
use speclint_core::{pointer, Document, Rules};
use speclint_parsers::walker::{self, Node, NodeData};

use crate::naming::NamingConvention;
use crate::report::Report;
use crate::types::{RuleError, Violation};

pub const NAMING: &str = "naming";
pub const NO_EMPTY_OPERATION_ID: &str = "noEmptyOperationId";
pub const NO_EMPTY_DESCRIPTIONS: &str = "noEmptyDescriptions";
pub const SLASH_TERMINATED_PATHS: &str = "slashTerminatedPaths";
pub const REQUIRE_OPERATION_TAGS: &str = "requireOperationTags";
pub const NO_UNUSED_DEFINITIONS: &str = "noUnusedDefinitions";
pub const NO_DUPLICATE_OPERATION_IDS: &str = "noDuplicateOperationIds";
pub const NO_MISSING_REQUIRED_PROPERTIES: &str = "noMissingRequiredProperties";

/// Everything a rule needs: configuration, the bound document, the
/// externally computed set of reachable definitions, and the report.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub rules: &'a Rules,
    pub document: &'a Document,
    pub reachable_definitions: &'a BTreeSet<String>,
    pub report: &'a Report,
}

impl<'a> RuleContext<'a> {
    /// Walk the bound document from the root.
    pub fn walk<V>(&self, mut visitor: V)
    where
        V: FnMut(Node<'a>, &NodeData),
    {
        walker::walk_document(self.document, &mut visitor);
    }

    fn violation(&self, rule: &str, reference: &str, message: String) {
        self.report
            .add_violation(Violation::new(rule, reference, message));
    }
}

fn enabled(flag: Option<bool>) -> bool {
    flag == Some(true)
}

/// Naming conventions resolved from [`NamingOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NamingChecks {
    pub paths: Option<NamingConvention>,
    pub tags: Option<NamingConvention>,
    pub operations: Option<NamingConvention>,
    pub parameters: Option<NamingConvention>,
    pub definitions: Option<NamingConvention>,
    pub properties: Option<NamingConvention>,
}

impl NamingChecks {
    /// Resolve every configured convention name, failing on the first one
    /// that has no checker.
    pub fn resolve(options: &NamingOptions) -> Result<Self, RuleError> {
        fn one(
            category: &'static str,
            name: &Option<String>,
        ) -> Result<Option<NamingConvention>, RuleError> {
            match name {
                None => Ok(None),
                Some(name) => NamingConvention::from_name(name).map(Some).ok_or_else(|| {
                    RuleError::UnknownConvention {
                        rule: NAMING,
                        category,
                        convention: name.clone(),
                        expected: NamingConvention::expected_names(),
                    }
                }),
            }
        }

        Ok(Self {
            paths: one("paths", &options.paths)?,
            tags: one("tags", &options.tags)?,
            operations: one("operations", &options.operations)?,
            parameters: one("parameters", &options.parameters)?,
            definitions: one("definitions", &options.definitions)?,
            properties: one("properties", &options.properties)?,
        })
    }
}

/// `{id}` style template placeholders are exempt from path naming.
fn is_path_parameter(segment: &str) -> bool {
    segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}')
}

pub fn naming(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    let Some(options) = &ctx.rules.naming else {
        return Ok(());
    };
    let checks = NamingChecks::resolve(options)?;

    ctx.walk(|node, data| match node {
        Node::PathItem(_) => {
            let Some(convention) = checks.paths else { return };
            for segment in data.key.split('/') {
                if segment.is_empty() || is_path_parameter(segment) {
                    continue;
                }
                if !convention.matches(segment) {
                    ctx.violation(
                        NAMING,
                        &data.reference,
                        format!(
                            "path segment \"{segment}\" in \"{}\" must follow the {convention} naming convention",
                            data.key
                        ),
                    );
                }
            }
        }
        Node::Operation(operation) => {
            if let Some(convention) = checks.operations {
                if !convention.matches(&operation.operation_id) {
                    ctx.violation(
                        NAMING,
                        &data.reference,
                        format!(
                            "operation id \"{}\" must follow the {convention} naming convention",
                            operation.operation_id
                        ),
                    );
                }
            }
            if let Some(convention) = checks.tags {
                let tags_ref = pointer::join(&data.reference, "tags");
                for (i, tag) in operation.tags.iter().enumerate() {
                    if !convention.matches(tag) {
                        ctx.violation(
                            NAMING,
                            &pointer::join(&tags_ref, &i.to_string()),
                            format!("tag \"{tag}\" must follow the {convention} naming convention"),
                        );
                    }
                }
            }
        }
        Node::Parameter(parameter) => {
            let Some(convention) = checks.parameters else { return };
            // a `$ref` parameter is named where it is defined
            if parameter.reference.is_some() {
                return;
            }
            if !convention.matches(&parameter.name) {
                ctx.violation(
                    NAMING,
                    &data.reference,
                    format!(
                        "parameter \"{}\" must follow the {convention} naming convention",
                        parameter.name
                    ),
                );
            }
        }
        Node::Definitions(definitions) => {
            let Some(convention) = checks.definitions else { return };
            for name in definitions.keys() {
                if !convention.matches(name) {
                    ctx.violation(
                        NAMING,
                        &pointer::join(&data.reference, name),
                        format!("definition \"{name}\" must follow the {convention} naming convention"),
                    );
                }
            }
        }
        Node::Schema(schema) => {
            let Some(convention) = checks.properties else { return };
            for name in schema.properties.keys() {
                if !convention.matches(name) {
                    ctx.violation(
                        NAMING,
                        &pointer::join(&data.reference, name),
                        format!("property \"{name}\" must follow the {convention} naming convention"),
                    );
                }
            }
        }
        _ => {}
    });
    Ok(())
}

pub fn no_empty_operation_id(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    if !enabled(ctx.rules.no_empty_operation_id) {
        return Ok(());
    }
    ctx.walk(|node, data| {
        if let Node::Operation(operation) = node {
            if operation.operation_id.is_empty() {
                ctx.violation(
                    NO_EMPTY_OPERATION_ID,
                    &data.reference,
                    format!("operation \"{}\" must have an operationId", data.reference),
                );
            }
        }
    });
    Ok(())
}

pub fn no_empty_descriptions(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    let Some(options) = &ctx.rules.no_empty_descriptions else {
        return Ok(());
    };
    ctx.walk(|node, data| match node {
        Node::Operation(operation) if !options.ignore_operations => {
            if operation.description.is_empty() {
                ctx.violation(
                    NO_EMPTY_DESCRIPTIONS,
                    &data.reference,
                    format!("operation \"{}\" must have a description", data.reference),
                );
            }
        }
        Node::Parameter(parameter) if !options.ignore_parameters => {
            if parameter.reference.is_none() && parameter.description.is_empty() {
                ctx.violation(
                    NO_EMPTY_DESCRIPTIONS,
                    &data.reference,
                    format!("parameter \"{}\" must have a description", parameter.name),
                );
            }
        }
        Node::Schema(schema) if !options.ignore_properties => {
            for (name, property) in &schema.properties {
                if property.reference.is_none() && property.description.is_empty() {
                    ctx.violation(
                        NO_EMPTY_DESCRIPTIONS,
                        &pointer::join(&data.reference, name),
                        format!("property \"{name}\" must have a description"),
                    );
                }
            }
        }
        _ => {}
    });
    Ok(())
}

pub fn slash_terminated_paths(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    let Some(require_slash) = ctx.rules.slash_terminated_paths else {
        return Ok(());
    };
    ctx.walk(|node, data| {
        if !matches!(node, Node::PathItem(_)) {
            return;
        }
        let template = data.key.as_str();
        let ends_with_slash = template.ends_with('/');
        if require_slash && !ends_with_slash {
            ctx.violation(
                SLASH_TERMINATED_PATHS,
                &data.reference,
                format!("path \"{template}\" must end with a slash"),
            );
        } else if !require_slash && ends_with_slash && template != "/" {
            ctx.violation(
                SLASH_TERMINATED_PATHS,
                &data.reference,
                format!("path \"{template}\" must not end with a slash"),
            );
        }
    });
    Ok(())
}

pub fn require_operation_tags(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    if !enabled(ctx.rules.require_operation_tags) {
        return Ok(());
    }
    ctx.walk(|node, data| {
        if let Node::Operation(operation) = node {
            if operation.tags.is_empty() {
                ctx.violation(
                    REQUIRE_OPERATION_TAGS,
                    &data.reference,
                    format!("operation \"{}\" must have at least 1 tag", data.reference),
                );
            }
        }
    });
    Ok(())
}

pub fn no_unused_definitions(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    if !enabled(ctx.rules.no_unused_definitions) {
        return Ok(());
    }
    ctx.walk(|node, data| {
        let Node::Definitions(definitions) = node else { return };
        for name in definitions.keys() {
            let reference = pointer::join(&data.reference, name);
            if !ctx.reachable_definitions.contains(&reference) {
                ctx.violation(
                    NO_UNUSED_DEFINITIONS,
                    &reference,
                    format!("definition \"{name}\" is unused"),
                );
            }
        }
    });
    Ok(())
}

pub fn no_duplicate_operation_ids(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    if !enabled(ctx.rules.no_duplicate_operation_ids) {
        return Ok(());
    }
    // operation id -> reference of its first occurrence
    let mut first_seen: HashMap<String, String> = HashMap::new();
    ctx.walk(|node, data| {
        let Node::Operation(operation) = node else { return };
        if operation.operation_id.is_empty() {
            return;
        }
        match first_seen.get(&operation.operation_id) {
            Some(first) => ctx.violation(
                NO_DUPLICATE_OPERATION_IDS,
                &data.reference,
                format!(
                    "operation id \"{}\" is a duplicate of \"{first}\"",
                    operation.operation_id
                ),
            ),
            None => {
                first_seen.insert(operation.operation_id.clone(), data.reference.clone());
            }
        }
    });
    Ok(())
}

pub fn no_missing_required_properties(ctx: &RuleContext<'_>) -> Result<(), RuleError> {
    if !enabled(ctx.rules.no_missing_required_properties) {
        return Ok(());
    }
    ctx.walk(|node, data| {
        let Node::Schema(schema) = node else { return };
        for name in &schema.required {
            if !schema.properties.contains_key(name) {
                ctx.violation(
                    NO_MISSING_REQUIRED_PROPERTIES,
                    &data.reference,
                    format!(
                        "property \"{name}\" is listed as required but is not defined under \"properties\""
                    ),
                );
            }
        }
    });
    Ok(())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod tests;
