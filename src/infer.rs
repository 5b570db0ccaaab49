//! Structural inference over materialized JSON values.
//!
//! Pure and deterministic: every call builds a fresh [`SchemaNode`] tree
//! bottom-up, with [`classify`] handling scalar leaves and [`unify`]
//! collapsing heterogeneous sequence elements. Recursion is bounded by the
//! input itself; `serde_json::Value` is acyclic by construction.

pub mod classify;
pub mod unify;

use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{ObjectShape, SchemaNode};

pub use classify::classify;
pub use unify::unify;

/// Infer the schema of one value.
pub fn infer(value: &Value) -> SchemaNode {
    match value {
        Value::Array(items) => {
            if items.is_empty() {
                return SchemaNode::Array(Box::new(SchemaNode::Unknown));
            }
            let children = items.iter().map(infer).collect();
            SchemaNode::Array(Box::new(unify::unify_nonempty(children)))
        }
        Value::Object(map) => {
            let mut shape = ObjectShape::default();
            for (key, child) in map {
                // A parsed JSON object has no "absent" values: every key it
                // carries counts as present, explicitly-null ones included.
                shape.required.insert(key.clone());
                shape.properties.insert(key.clone(), infer(child));
            }
            SchemaNode::Object(shape)
        }
        scalar => classify::classify(scalar),
    }
}

/// Infer each sample independently and unify the results.
pub fn infer_samples<'a, I>(values: I) -> Result<SchemaNode, SchemaError>
where
    I: IntoIterator<Item = &'a Value>,
{
    unify::unify(values.into_iter().map(infer).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::StringFormat;
    use serde_json::json;

    #[test]
    fn empty_object_has_no_properties_and_no_required() {
        let node = infer(&json!({}));
        let SchemaNode::Object(shape) = node else {
            panic!("expected object node");
        };
        assert!(shape.properties.is_empty());
        assert!(shape.required.is_empty());
    }

    #[test]
    fn empty_array_wraps_the_unknown_sentinel() {
        assert_eq!(infer(&json!([])), SchemaNode::Array(Box::new(SchemaNode::Unknown)));
    }

    #[test]
    fn explicit_null_field_counts_as_present() {
        let node = infer(&json!({ "x": null }));
        let SchemaNode::Object(shape) = node else {
            panic!("expected object node");
        };
        assert_eq!(shape.properties.get("x"), Some(&SchemaNode::Null));
        assert!(shape.required.contains("x"));
    }

    #[test]
    fn heterogeneous_array_unifies_to_a_three_way_union() {
        let node = infer(&json!([1, "a", true]));
        let SchemaNode::Array(element) = node else {
            panic!("expected array node");
        };
        let SchemaNode::Union(members) = *element else {
            panic!("expected union element");
        };
        assert_eq!(
            members,
            vec![SchemaNode::Integer, SchemaNode::String(None), SchemaNode::Boolean]
        );
    }

    #[test]
    fn reordering_array_elements_keeps_the_same_member_set() {
        let a = infer(&json!([1, "a", true]));
        let b = infer(&json!([true, 1, "a"]));
        let member_count = |node: &SchemaNode| match node {
            SchemaNode::Array(el) => match el.as_ref() {
                SchemaNode::Union(members) => members.len(),
                _ => 1,
            },
            _ => panic!("expected array node"),
        };
        assert_eq!(member_count(&a), 3);
        assert_eq!(member_count(&b), 3);
    }

    #[test]
    fn object_samples_merge_with_presence_tracking() {
        let node = infer(&json!([{ "a": 1 }, { "a": 1, "b": "x" }]));
        let SchemaNode::Array(element) = node else {
            panic!("expected array node");
        };
        let SchemaNode::Object(shape) = *element else {
            panic!("expected merged object element");
        };
        assert_eq!(shape.properties.get("a"), Some(&SchemaNode::Integer));
        assert_eq!(shape.properties.get("b"), Some(&SchemaNode::String(None)));
        assert!(shape.required.contains("a"));
        assert!(!shape.required.contains("b"));
    }

    #[test]
    fn nested_structures_recurse() {
        let node = infer(&json!({
            "id": "550e8400-e29b-41d4-a716-446655440000",
            "tags": ["a", "b"],
            "meta": { "depth": 2 }
        }));
        let SchemaNode::Object(shape) = node else {
            panic!("expected object node");
        };
        assert_eq!(
            shape.properties.get("id"),
            Some(&SchemaNode::String(Some(StringFormat::Uuid)))
        );
        assert_eq!(
            shape.properties.get("tags"),
            Some(&SchemaNode::Array(Box::new(SchemaNode::String(None))))
        );
        assert!(matches!(shape.properties.get("meta"), Some(SchemaNode::Object(_))));
    }

    #[test]
    fn infer_samples_unifies_across_documents() {
        let a = json!({ "id": 1 });
        let b = json!({ "id": 2, "name": "x" });
        let node = infer_samples([&a, &b]).unwrap();
        let SchemaNode::Object(shape) = node else {
            panic!("expected merged object");
        };
        assert!(shape.required.contains("id"));
        assert!(!shape.required.contains("name"));
    }

    #[test]
    fn infer_samples_rejects_empty_input() {
        let no_samples = Vec::<&serde_json::Value>::new();
        assert!(matches!(infer_samples(no_samples), Err(SchemaError::EmptyUnification)));
    }
}
