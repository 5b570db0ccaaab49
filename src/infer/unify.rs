//! Unification: merging nodes observed at the same structural position.

use crate::error::SchemaError;
use crate::node::{ObjectShape, SchemaNode};

/// Unify a set of nodes into one node or a union.
///
/// Singleton input is returned unchanged. Duplicates, judged by deep
/// structural equality, collapse to the first-seen instance. Same-kind
/// composites merge (object with object, array with array) instead of
/// standing side by side in a union, which is what lets heterogeneous
/// object samples converge on a single shape with presence tracking.
/// Anything still distinct after that — different scalar kinds, strings of
/// different format — becomes a union in first-seen order.
pub fn unify(nodes: Vec<SchemaNode>) -> Result<SchemaNode, SchemaError> {
    if nodes.is_empty() {
        return Err(SchemaError::EmptyUnification);
    }
    Ok(unify_nonempty(nodes))
}

pub(crate) fn unify_nonempty(nodes: Vec<SchemaNode>) -> SchemaNode {
    let mut distinct: Vec<SchemaNode> = Vec::new();
    for node in nodes {
        match node {
            // unions never nest: absorb members individually
            SchemaNode::Union(members) => {
                for member in members {
                    absorb(&mut distinct, member);
                }
            }
            other => absorb(&mut distinct, other),
        }
    }
    if distinct.len() == 1 {
        return distinct.remove(0);
    }
    SchemaNode::Union(distinct)
}

fn absorb(distinct: &mut Vec<SchemaNode>, node: SchemaNode) {
    for i in 0..distinct.len() {
        let mergeable = matches!(
            (&distinct[i], &node),
            (SchemaNode::Object(_), SchemaNode::Object(_))
                | (SchemaNode::Array(_), SchemaNode::Array(_))
        );
        if mergeable {
            let existing = std::mem::replace(&mut distinct[i], SchemaNode::Unknown);
            distinct[i] = merge_same_kind(existing, node);
            return;
        }
        if distinct[i] == node {
            return;
        }
    }
    distinct.push(node);
}

fn merge_same_kind(a: SchemaNode, b: SchemaNode) -> SchemaNode {
    match (a, b) {
        (SchemaNode::Object(x), SchemaNode::Object(y)) => SchemaNode::Object(merge_objects(x, y)),
        (SchemaNode::Array(x), SchemaNode::Array(y)) => {
            SchemaNode::Array(Box::new(merge_elements(*x, *y)))
        }
        // absorb() only routes matching pairs here
        (a, _) => a,
    }
}

/// Property union with per-key unification. A field stays required only if
/// it was present in the samples behind both sides; a key seen on one side
/// only is by definition optional. Key order: left side first, then
/// right-only keys in their own order.
fn merge_objects(a: ObjectShape, mut b: ObjectShape) -> ObjectShape {
    let mut out = ObjectShape::default();
    for (key, mine) in a.properties {
        let merged = match b.properties.shift_remove(&key) {
            Some(theirs) => unify_nonempty(vec![mine, theirs]),
            None => mine,
        };
        if a.required.contains(&key) && b.required.contains(&key) {
            out.required.insert(key.clone());
        }
        out.properties.insert(key, merged);
    }
    for (key, theirs) in b.properties {
        out.properties.insert(key, theirs);
    }
    out
}

/// The unknown sentinel (an array only ever observed empty) is an identity
/// for element merging.
fn merge_elements(a: SchemaNode, b: SchemaNode) -> SchemaNode {
    match (a, b) {
        (SchemaNode::Unknown, b) => b,
        (a, SchemaNode::Unknown) => a,
        (a, b) => unify_nonempty(vec![a, b]),
    }
}
