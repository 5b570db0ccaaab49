//! JSON Schema (draft-07) rendering.

use serde_json::{Map, Value, json};

use crate::error::SchemaError;
use crate::node::SchemaNode;

use super::dedup;

pub const DRAFT07: &str = "http://json-schema.org/draft-07/schema#";

#[derive(Clone, Copy, Debug)]
pub struct SchemaDocOptions {
    /// With this off, every property of every object is listed in
    /// `required`, current keys and all. That intentionally diverges from
    /// the interface renderer's equivalent case; it is the documented
    /// historical behavior and is kept for compatibility.
    pub infer_optional: bool,
    /// Indented output when true.
    pub pretty: bool,
}

impl Default for SchemaDocOptions {
    fn default() -> Self {
        Self { infer_optional: true, pretty: true }
    }
}

/// Render a draft-07 document: `$schema`, `title`, and the root rendering
/// merged at the top level, then the `anyOf` cleanup walk, then
/// serialization honoring the pretty flag.
pub fn render_json_schema(
    root: &SchemaNode,
    title: &str,
    options: SchemaDocOptions,
) -> Result<String, SchemaError> {
    let mut doc = Map::new();
    doc.insert("$schema".to_string(), Value::from(DRAFT07));
    doc.insert("title".to_string(), Value::from(title));
    if let Value::Object(body) = node_schema(root, options.infer_optional) {
        for (key, value) in body {
            doc.insert(key, value);
        }
    }
    let mut doc = Value::Object(doc);
    dedup::collapse_any_of(&mut doc);
    let text = if options.pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    Ok(text)
}

fn node_schema(node: &SchemaNode, infer_optional: bool) -> Value {
    match node {
        SchemaNode::Null => json!({ "type": "null" }),
        SchemaNode::Boolean => json!({ "type": "boolean" }),
        SchemaNode::Integer => json!({ "type": "integer" }),
        SchemaNode::Number => json!({ "type": "number" }),
        SchemaNode::String(format) => {
            let mut o = json!({ "type": "string" });
            if let Some(format) = format {
                o["format"] = Value::from(format.as_str());
            }
            o
        }
        SchemaNode::Array(child) => {
            // an array only ever seen empty constrains its items with nothing
            let items = match child.as_ref() {
                SchemaNode::Unknown => json!({}),
                other => node_schema(other, infer_optional),
            };
            json!({ "type": "array", "items": items })
        }
        SchemaNode::Object(shape) => {
            let mut properties = Map::new();
            for (key, child) in &shape.properties {
                properties.insert(key.clone(), node_schema(child, infer_optional));
            }
            let required: Vec<Value> = if infer_optional {
                shape.required.iter().map(|k| Value::from(k.as_str())).collect()
            } else {
                shape.properties.keys().map(|k| Value::from(k.as_str())).collect()
            };
            let mut o = json!({ "type": "object", "properties": properties });
            if !required.is_empty() {
                o["required"] = Value::Array(required);
            }
            o
        }
        SchemaNode::Union(members) => {
            if members.is_empty() {
                return json!({});
            }
            let arms: Vec<Value> =
                members.iter().map(|member| node_schema(member, infer_optional)).collect();
            json!({ "anyOf": arms })
        }
        // a kind with no evidence gets an annotation, not a type keyword
        SchemaNode::Unknown => json!({ "description": "unknown value kind" }),
    }
}
