//! Definition reachability analysis.
//!
//! Computes which `#/definitions/...` entries are referenced, directly or
//! transitively, from the parameters and responses of any operation. The
//! result feeds the unused-definitions rule.

use std::collections::{BTreeSet, HashSet};

use speclint_core::document::{Document, Parameter, Response, Schema};
use speclint_core::pointer;

struct Collector<'a> {
    document: &'a Document,
    found: BTreeSet<String>,
    pending: Vec<&'a Schema>,
    seen_shared: HashSet<&'a str>,
}

impl<'a> Collector<'a> {
    fn parameter(&mut self, parameter: &'a Parameter) {
        if let Some(reference) = parameter.reference.as_deref() {
            if let Some(shared) = self.shared(reference, "#/parameters/") {
                if let Some(target) = self.document.parameters.get(&*shared) {
                    self.parameter(target);
                }
            }
        }
        if let Some(schema) = &parameter.schema {
            self.pending.push(schema);
        }
    }

    fn response(&mut self, response: &'a Response) {
        if let Some(reference) = response.reference.as_deref() {
            if let Some(shared) = self.shared(reference, "#/responses/") {
                if let Some(target) = self.document.responses.get(&*shared) {
                    self.response(target);
                }
            }
        }
        if let Some(schema) = &response.schema {
            self.pending.push(schema);
        }
    }

    /// Name behind a `$ref` into a shared collection, the first time it is seen.
    fn shared(&mut self, reference: &'a str, prefix: &str) -> Option<std::borrow::Cow<'a, str>> {
        let name = reference.strip_prefix(prefix)?;
        if !self.seen_shared.insert(reference) {
            return None;
        }
        Some(pointer::unescape(name))
    }

    fn drain(&mut self) {
        while let Some(schema) = self.pending.pop() {
            if let Some(name) = schema.reference.as_deref().and_then(pointer::definition_name) {
                let canonical = pointer::definition(&name);
                if self.found.insert(canonical) {
                    if let Some(target) = self.document.definitions.get(&*name) {
                        self.pending.push(target);
                    }
                }
            }
            self.pending.extend(schema.nested());
        }
    }
}

/// Canonical references (`#/definitions/<escaped name>`) of every definition
/// reachable from an operation's inputs or outputs.
///
/// Path-level parameters count as inputs of every operation on the path.
/// `$ref`s into `#/parameters` and `#/responses` are resolved against the
/// document's shared collections. A reference to a definition that does not
/// exist is still reported as reachable.
pub fn reachable_definitions(document: &Document) -> BTreeSet<String> {
    let mut collector = Collector {
        document,
        found: BTreeSet::new(),
        pending: Vec::new(),
        seen_shared: HashSet::new(),
    };

    for item in document.paths.values() {
        for parameter in &item.parameters {
            collector.parameter(parameter);
        }
        for (_, operation) in item.operations() {
            for parameter in &operation.parameters {
                collector.parameter(parameter);
            }
            for response in operation.responses.iter().flat_map(|r| r.values()) {
                collector.response(response);
            }
        }
        collector.drain();
    }

    tracing::debug!(count = collector.found.len(), "reachable definitions");
    collector.found
}
