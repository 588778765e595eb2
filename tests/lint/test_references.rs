// Walker references against the document's real structure.
use std::collections::BTreeSet;

use speclint_parsers::walker::{walk_document, Node, NodeCategory};

use super::common::generators::generate_document;
use super::common::{yaml_document, PETSTORE_YAML};

/// Every reference of a node that sits at its own document position
/// resolves as a JSON pointer against the raw document.
#[test]
fn test_structural_references_resolve_as_json_pointers() {
    for text in [PETSTORE_YAML.to_string(), generate_document(12, 6)] {
        let raw: serde_json::Value = serde_yaml::from_str(&text).unwrap();
        let document = yaml_document(&text);

        let mut checked = 0;
        walk_document(&document, &mut |node, data| {
            let resolvable = match node {
                Node::Document(_) | Node::PathItem(_) | Node::Operation(_) => true,
                // collections appear in the raw document only when non-empty
                Node::Paths(paths) => !paths.is_empty(),
                Node::Definitions(definitions) => !definitions.is_empty(),
                Node::Parameters(parameters) => !parameters.is_empty(),
                Node::Responses(responses) => !responses.is_empty(),
                // named entries directly under a shared collection
                Node::Schema(_) | Node::Parameter(_) | Node::Response(_) => {
                    data.reference.matches('/').count() == 2
                        && !data.reference.starts_with("#/paths")
                }
            };
            if !resolvable {
                return;
            }
            let pointer = data.reference.trim_start_matches('#');
            assert!(
                raw.pointer(pointer).is_some(),
                "{} ({}) does not resolve",
                data.reference,
                node.category()
            );
            checked += 1;
        });
        assert!(checked > 10);
    }
}

#[test]
fn test_references_extend_parent_and_never_collide() {
    let document = yaml_document(PETSTORE_YAML);
    let mut previous: Option<String> = None;
    let mut distinct = BTreeSet::new();
    let mut total = 0;

    walk_document(&document, &mut |node, data| {
        // parameters and response/parameter schemas share their owner's reference
        let shares_owner = matches!(node.category(), NodeCategory::Parameter | NodeCategory::Schema)
            && previous.as_deref() == Some(data.reference.as_str());
        if !shares_owner && data.reference != "#" {
            let parent = &data.reference[..data.reference.rfind('/').unwrap()];
            assert!(
                distinct.contains(parent),
                "{} visited before its parent {parent}",
                data.reference
            );
        }
        if !shares_owner {
            total += 1;
            distinct.insert(data.reference.clone());
        }
        previous = Some(data.reference.clone());
    });

    assert_eq!(total, distinct.len());
    assert!(distinct.contains("#/paths/~1pets~1{petId}/get"));
    assert!(distinct.contains("#/paths/~1pets/get/200"));
    assert!(distinct.contains("#/definitions/Pet/owner"));
}

#[test]
fn test_walk_order_is_independent_of_source_order() {
    let shuffled = r#"
paths:
  /zebras:
    delete: {}
    get: {}
  /apes:
    post: {}
definitions:
  Zed: {}
  Alpha: {}
"#;
    let document = yaml_document(shuffled);
    let mut references = Vec::new();
    walk_document(&document, &mut |_, data| references.push(data.reference.clone()));
    assert_eq!(
        references,
        vec![
            "#",
            "#/paths",
            "#/paths/~1apes",
            "#/paths/~1apes/post",
            "#/paths/~1zebras",
            "#/paths/~1zebras/get",
            "#/paths/~1zebras/delete",
            "#/definitions",
            "#/definitions/Alpha",
            "#/definitions/Zed",
            "#/parameters",
            "#/responses",
        ]
    );
}
