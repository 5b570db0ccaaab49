//! TypeScript-style interface rendering.

use crate::node::SchemaNode;

use super::dedup;

const TAB: &str = "  ";

/// Render `root` as `interface <name> { ... }`.
///
/// A non-object root still renders, degrading to a `type <name> = ...;`
/// alias. The optional marker `?` is emitted only when `infer_optional` is
/// on and the field is missing from the required set; with it off every
/// field renders as required regardless of presence history. Output goes
/// through the union text normalizer before it is returned.
pub fn render_interface(root: &SchemaNode, name: &str, infer_optional: bool) -> String {
    let text = match root {
        SchemaNode::Object(shape) => {
            let mut out = format!("interface {name} {{\n");
            if shape.properties.is_empty() {
                // open mapping rather than an empty literal
                out.push_str(TAB);
                out.push_str("[key: string]: any;\n");
            }
            for (key, child) in &shape.properties {
                let marker = if infer_optional && !shape.required.contains(key) { "?" } else { "" };
                out.push_str(&format!(
                    "{TAB}{}{marker}: {};\n",
                    property_name(key),
                    type_text(child, infer_optional)
                ));
            }
            out.push_str("}\n");
            out
        }
        other => format!("type {name} = {};\n", type_text(other, infer_optional)),
    };
    dedup::normalize_union_text(&text)
}

fn type_text(node: &SchemaNode, infer_optional: bool) -> String {
    match node {
        SchemaNode::Null => "null".to_string(),
        SchemaNode::Boolean => "boolean".to_string(),
        // the target language has a single numeric keyword
        SchemaNode::Integer | SchemaNode::Number => "number".to_string(),
        // formats are a JSON Schema concern, not surfaced here
        SchemaNode::String(_) => "string".to_string(),
        SchemaNode::Array(child) => match child.as_ref() {
            SchemaNode::Union(_) => format!("({})[]", type_text(child, infer_optional)),
            _ => format!("{}[]", type_text(child, infer_optional)),
        },
        SchemaNode::Object(shape) => {
            if shape.properties.is_empty() {
                return "{ [key: string]: any }".to_string();
            }
            let fields: Vec<String> = shape
                .properties
                .iter()
                .map(|(key, child)| {
                    let marker =
                        if infer_optional && !shape.required.contains(key) { "?" } else { "" };
                    format!(
                        "{}{marker}: {}",
                        property_name(key),
                        type_text(child, infer_optional)
                    )
                })
                .collect();
            format!("{{ {} }}", fields.join("; "))
        }
        SchemaNode::Union(members) => members
            .iter()
            .map(|member| type_text(member, infer_optional))
            .collect::<Vec<_>>()
            .join(" | "),
        SchemaNode::Unknown => "any".to_string(),
    }
}

/// Quote property names that are not plain identifiers.
fn property_name(name: &str) -> String {
    let plain = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '$');
    if plain { name.to_string() } else { format!("{name:?}") }
}
