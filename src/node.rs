//! The inferred-schema intermediate representation.

use indexmap::{IndexMap, IndexSet};

/// Canonical semantic formats detected on primitive strings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringFormat {
    DateTime,
    Email,
    Uuid,
}

impl StringFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            StringFormat::DateTime => "date-time",
            StringFormat::Email => "email",
            StringFormat::Uuid => "uuid",
        }
    }
}

/// One position in the inferred structure.
///
/// Built bottom-up by [`crate::infer::infer`]; renderers only read it.
/// Equality is deep structural equality. The object mapping compares
/// order-insensitively (`IndexMap` equality ignores insertion order), which
/// union deduplication relies on.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaNode {
    Null,
    Boolean,
    Integer,
    Number,
    String(Option<StringFormat>),
    /// Exactly one child: the unified type of every observed element. An
    /// array only ever seen empty wraps [`SchemaNode::Unknown`], never null.
    Array(Box<SchemaNode>),
    Object(ObjectShape),
    /// ≥ 2 structurally distinct members, none itself a union.
    Union(Vec<SchemaNode>),
    /// No evidence at this position: the element type of an empty array, or
    /// a value kind with no defined rendering.
    Unknown,
}

/// Property mapping in first-seen order, plus the set of field names that
/// had a value (explicit null included) in every contributing sample.
/// `required` is always a subset of the mapping's keys.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ObjectShape {
    pub properties: IndexMap<String, SchemaNode>,
    pub required: IndexSet<String>,
}

impl SchemaNode {
    /// Graft externally supplied fields onto an object node, returning a new
    /// node. Grafted fields count as required: the caller asked for them by
    /// name. Non-object nodes are returned unchanged.
    pub fn extend_object(self, extra: IndexMap<String, SchemaNode>) -> SchemaNode {
        match self {
            SchemaNode::Object(mut shape) => {
                for (key, node) in extra {
                    shape.required.insert(key.clone());
                    shape.properties.insert(key, node);
                }
                SchemaNode::Object(shape)
            }
            other => other,
        }
    }
}
