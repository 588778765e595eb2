//! Structural walk over a [`Document`].
//!
//! The walker visits every node reachable by containment (it never follows
//! `$ref`), handing each visitor the node plus a [`NodeData`] carrying the
//! node's local key and its pointer reference from the document root.
//! Name-keyed collections are `BTreeMap`s, so siblings are always visited in
//! lexicographic key order.

use std::collections::BTreeMap;

use speclint_core::document::{Document, Operation, Parameter, PathItem, Response, Schema};
use speclint_core::pointer;

/// A borrowed view of one node in the document tree.
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Document(&'a Document),
    Paths(&'a BTreeMap<String, PathItem>),
    PathItem(&'a PathItem),
    Operation(&'a Operation),
    Parameter(&'a Parameter),
    Response(&'a Response),
    Definitions(&'a BTreeMap<String, Schema>),
    Parameters(&'a BTreeMap<String, Parameter>),
    Responses(&'a BTreeMap<String, Response>),
    Schema(&'a Schema),
}

/// Tag of a [`Node`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeCategory {
    Document,
    Paths,
    PathItem,
    Operation,
    Parameter,
    Response,
    Definitions,
    Parameters,
    Responses,
    Schema,
}

impl NodeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeCategory::Document => "document",
            NodeCategory::Paths => "paths",
            NodeCategory::PathItem => "path_item",
            NodeCategory::Operation => "operation",
            NodeCategory::Parameter => "parameter",
            NodeCategory::Response => "response",
            NodeCategory::Definitions => "definitions",
            NodeCategory::Parameters => "parameters",
            NodeCategory::Responses => "responses",
            NodeCategory::Schema => "schema",
        }
    }
}

impl std::fmt::Display for NodeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Node<'_> {
    pub fn category(&self) -> NodeCategory {
        match self {
            Node::Document(_) => NodeCategory::Document,
            Node::Paths(_) => NodeCategory::Paths,
            Node::PathItem(_) => NodeCategory::PathItem,
            Node::Operation(_) => NodeCategory::Operation,
            Node::Parameter(_) => NodeCategory::Parameter,
            Node::Response(_) => NodeCategory::Response,
            Node::Definitions(_) => NodeCategory::Definitions,
            Node::Parameters(_) => NodeCategory::Parameters,
            Node::Responses(_) => NodeCategory::Responses,
            Node::Schema(_) => NodeCategory::Schema,
        }
    }
}

/// Position of a visited node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NodeData {
    /// Local name: path template, lowercase verb, status code, map key, or
    /// parameter name. Empty for the root.
    pub key: String,
    /// Pointer from the document root, e.g. `#/paths/~1pets/get`.
    pub reference: String,
}

impl NodeData {
    pub fn root() -> Self {
        Self {
            key: String::new(),
            reference: pointer::ROOT.to_string(),
        }
    }

    /// Child whose reference extends ours by the escaped `key`.
    fn child(&self, key: &str) -> Self {
        Self {
            key: key.to_string(),
            reference: pointer::join(&self.reference, key),
        }
    }

    /// Child that shares our reference.
    fn inline(&self, key: &str) -> Self {
        Self {
            key: key.to_string(),
            reference: self.reference.clone(),
        }
    }
}

/// Visit `node` and everything it structurally contains, depth first.
///
/// `visitor` runs exactly once per node, parent before children. Absent
/// optional structure (no responses, no schema) is skipped.
pub fn walk<'a, V>(node: Node<'a>, data: &NodeData, visitor: &mut V)
where
    V: FnMut(Node<'a>, &NodeData),
{
    visitor(node, data);

    match node {
        Node::Document(doc) => {
            walk(Node::Paths(&doc.paths), &data.child("paths"), visitor);
            walk(
                Node::Definitions(&doc.definitions),
                &data.child("definitions"),
                visitor,
            );
            walk(
                Node::Parameters(&doc.parameters),
                &data.child("parameters"),
                visitor,
            );
            walk(
                Node::Responses(&doc.responses),
                &data.child("responses"),
                visitor,
            );
        }
        Node::Paths(paths) => {
            for (template, item) in paths {
                walk(Node::PathItem(item), &data.child(template), visitor);
            }
        }
        Node::PathItem(item) => {
            for (method, operation) in item.operations() {
                walk(
                    Node::Operation(operation),
                    &data.child(method.as_str()),
                    visitor,
                );
            }
        }
        Node::Operation(operation) => {
            for parameter in &operation.parameters {
                walk(
                    Node::Parameter(parameter),
                    &data.inline(&parameter.name),
                    visitor,
                );
            }
            if let Some(responses) = &operation.responses {
                for (status, response) in responses {
                    walk(Node::Response(response), &data.child(status), visitor);
                }
            }
        }
        Node::Response(response) => {
            if let Some(schema) = &response.schema {
                walk(Node::Schema(schema), data, visitor);
            }
        }
        Node::Parameter(parameter) => {
            if let Some(schema) = &parameter.schema {
                walk(Node::Schema(schema), data, visitor);
            }
        }
        Node::Definitions(definitions) => {
            for (name, schema) in definitions {
                walk(Node::Schema(schema), &data.child(name), visitor);
            }
        }
        Node::Parameters(parameters) => {
            for (name, parameter) in parameters {
                walk(Node::Parameter(parameter), &data.child(name), visitor);
            }
        }
        Node::Responses(responses) => {
            for (name, response) in responses {
                walk(Node::Response(response), &data.child(name), visitor);
            }
        }
        Node::Schema(schema) => {
            for (name, property) in &schema.properties {
                walk(Node::Schema(property), &data.child(name), visitor);
            }
        }
    }
}

/// Walk a whole document from the root.
pub fn walk_document<'a, V>(document: &'a Document, visitor: &mut V)
where
    V: FnMut(Node<'a>, &NodeData),
{
    walk(Node::Document(document), &NodeData::root(), visitor);
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
