//! Final union-deduplication passes, one per output target.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

// A run of ` | `-joined members. Parentheses and braces are excluded from
// the member class so inner unions normalize independently of their array
// wrapper and object-literal members are left alone.
static UNION_RUN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:[A-Za-z0-9_\[\]]+ \| )+[A-Za-z0-9_\[\]]+").expect("valid union-run regex")
});

/// Interface-target pass: within every union run, collapse adjacent
/// duplicate members and reorder adjacent pairs lexicographically,
/// repeating until the run stops changing. The fixed point is the sorted,
/// deduplicated member list; running the pass on its own output is a no-op.
pub fn normalize_union_text(text: &str) -> String {
    UNION_RUN
        .replace_all(text, |caps: &regex::Captures<'_>| normalize_run(&caps[0]))
        .into_owned()
}

fn normalize_run(run: &str) -> String {
    let mut members: Vec<&str> = run.split(" | ").collect();
    loop {
        let mut changed = false;
        let mut i = 0;
        while i + 1 < members.len() {
            if members[i] == members[i + 1] {
                members.remove(i + 1);
                changed = true;
            } else if members[i] > members[i + 1] {
                members.swap(i, i + 1);
                changed = true;
                i += 1;
            } else {
                i += 1;
            }
        }
        if !changed {
            return members.join(" | ");
        }
    }
}

/// JSON-Schema-target pass: walk the document, deduplicate every `anyOf`
/// array by structural value equality (first-seen order kept), and splice a
/// singleton `anyOf` member's keys directly into its parent.
pub fn collapse_any_of(value: &mut Value) {
    match value {
        Value::Array(items) => {
            for item in items {
                collapse_any_of(item);
            }
        }
        Value::Object(map) => {
            for (_, child) in map.iter_mut() {
                collapse_any_of(child);
            }
            let distinct = match map.get_mut("anyOf") {
                Some(Value::Array(members)) => {
                    let mut distinct: Vec<Value> = Vec::new();
                    for member in members.drain(..) {
                        if !distinct.contains(&member) {
                            distinct.push(member);
                        }
                    }
                    distinct
                }
                _ => return,
            };
            if distinct.len() == 1 {
                match distinct.into_iter().next() {
                    Some(Value::Object(keys)) => {
                        map.shift_remove("anyOf");
                        for (k, v) in keys {
                            map.insert(k, v);
                        }
                    }
                    Some(other) => {
                        // non-object member: keep the (now deduplicated) anyOf
                        map.insert("anyOf".to_string(), Value::Array(vec![other]));
                    }
                    None => {}
                }
            } else if distinct.is_empty() {
                map.shift_remove("anyOf");
            } else {
                map.insert("anyOf".to_string(), Value::Array(distinct));
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn union_runs_are_sorted_and_deduplicated() {
        assert_eq!(
            normalize_union_text("type T = string | number | string | boolean;"),
            "type T = boolean | number | string;"
        );
    }

    #[test]
    fn runs_inside_parentheses_normalize_independently() {
        assert_eq!(
            normalize_union_text("type T = (number | string | boolean)[];"),
            "type T = (boolean | number | string)[];"
        );
        // the array wrapper itself never joins the run
        assert_eq!(
            normalize_union_text("a: string[] | number;"),
            "a: number | string[];"
        );
    }

    #[test]
    fn normalization_is_idempotent() {
        let once = normalize_union_text("x: null | string | null;");
        assert_eq!(once, "x: null | string;");
        assert_eq!(normalize_union_text(&once), once);
    }

    #[test]
    fn text_without_unions_is_untouched() {
        let src = "interface A {\n  a: number;\n  b?: string;\n}\n";
        assert_eq!(normalize_union_text(src), src);
    }

    #[test]
    fn any_of_members_deduplicate_by_value() {
        let mut doc = json!({
            "anyOf": [
                { "type": "string" },
                { "type": "integer" },
                { "type": "string" }
            ]
        });
        collapse_any_of(&mut doc);
        assert_eq!(
            doc,
            json!({ "anyOf": [{ "type": "string" }, { "type": "integer" }] })
        );
    }

    #[test]
    fn singleton_any_of_is_spliced_into_the_parent() {
        let mut doc = json!({
            "items": { "anyOf": [{ "type": "string" }, { "type": "string" }] }
        });
        collapse_any_of(&mut doc);
        assert_eq!(doc, json!({ "items": { "type": "string" } }));
    }

    #[test]
    fn walk_reaches_nested_schemas() {
        let mut doc = json!({
            "properties": {
                "v": { "anyOf": [{ "type": "null" }, { "type": "null" }] }
            }
        });
        collapse_any_of(&mut doc);
        assert_eq!(doc, json!({ "properties": { "v": { "type": "null" } } }));
    }

    #[test]
    fn collapse_is_idempotent() {
        let mut doc = json!({
            "anyOf": [{ "type": "string" }, { "type": "integer" }]
        });
        let before = doc.clone();
        collapse_any_of(&mut doc);
        assert_eq!(doc, before);
        collapse_any_of(&mut doc);
        assert_eq!(doc, before);
    }
}
