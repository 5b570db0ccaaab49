//! Primitive classification: one scalar value to its canonical node.

use chrono::DateTime;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::node::{SchemaNode, StringFormat};

// local@domain.tld with at least one dot in the domain and a TLD of ≥ 2 letters
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
        .expect("valid email regex")
});

// 8-4-4-4-12 hex groups
static UUID_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$")
        .expect("valid uuid regex")
});

/// Classify one scalar value. Total and deterministic. Arrays and objects
/// belong to [`crate::infer::infer`]; handing one in here degrades to
/// [`SchemaNode::Unknown`].
pub fn classify(value: &Value) -> SchemaNode {
    match value {
        Value::Null => SchemaNode::Null,
        Value::Bool(_) => SchemaNode::Boolean,
        Value::Number(n) => classify_number(n),
        Value::String(s) => classify_str(s),
        Value::Array(_) | Value::Object(_) => SchemaNode::Unknown,
    }
}

/// Integer only for values with no fractional component. Non-finite values
/// cannot come out of `serde_json`, but the policy stands regardless: they
/// classify as `number`, never `integer`.
fn classify_number(n: &serde_json::Number) -> SchemaNode {
    if n.is_i64() || n.is_u64() {
        return SchemaNode::Integer;
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 => SchemaNode::Integer,
        _ => SchemaNode::Number,
    }
}

/// The three format detectors are checked in priority order and are
/// mutually exclusive: date-time, then email, then uuid.
pub fn classify_str(s: &str) -> SchemaNode {
    let format = if is_date_time(s) {
        Some(StringFormat::DateTime)
    } else if EMAIL_RE.is_match(s) {
        Some(StringFormat::Email)
    } else if UUID_RE.is_match(s) {
        Some(StringFormat::Uuid)
    } else {
        None
    };
    SchemaNode::String(format)
}

// ISO-8601 date-time with a mandatory offset:
// `YYYY-MM-DDThh:mm:ss[.frac](Z|±hh:mm)`. RFC 3339 is exactly that shape,
// so chrono does the heavy lifting.
fn is_date_time(s: &str) -> bool {
    DateTime::parse_from_rfc3339(s).is_ok()
}
