//! Input collaborators: file/glob/stdin loading, NDJSON splitting, JSON
//! pointer selection, and CSV row materialization.
//!
//! The inference core never touches I/O; everything here hands it fully
//! materialized `serde_json::Value`s.

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// Expand literal paths and quoted glob patterns; `-` means stdin.
pub fn resolve_input_patterns<I>(patterns: I) -> Result<Vec<InputSource>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    fn has_glob_chars(s: &str) -> bool {
        // Minimal glob detection for the `glob` crate syntax.
        s.bytes().any(|b| matches!(b, b'*' | b'?' | b'[' | b'{'))
    }

    let mut out = Vec::<InputSource>::new();

    for raw in patterns {
        let pattern = raw.as_ref();

        if pattern == "-" {
            out.push(InputSource::Stdin);
        } else if has_glob_chars(pattern) {
            let mut matched_any = false;
            for entry in
                glob::glob(pattern).with_context(|| format!("bad glob pattern: {pattern}"))?
            {
                let path = entry.with_context(|| format!("glob error in {pattern}"))?;
                matched_any = true;
                out.push(InputSource::File(path));
            }
            if !matched_any {
                // explicitly a glob but matched nothing -> surface as an error
                bail!("glob pattern matched no files: {pattern}");
            }
        } else {
            out.push(InputSource::File(PathBuf::from(pattern)));
        }
    }

    Ok(out)
}

impl InputSource {
    pub fn read_text(&self) -> Result<String> {
        match self {
            InputSource::Stdin => {
                let mut buf = String::new();
                std::io::stdin()
                    .read_to_string(&mut buf)
                    .context("failed to read stdin")?;
                Ok(buf)
            }
            InputSource::File(path) => std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display())),
        }
    }

    pub fn label(&self) -> String {
        match self {
            InputSource::Stdin => "<stdin>".to_string(),
            InputSource::File(path) => path.display().to_string(),
        }
    }
}

/// Deserialize with JSON-path context in error messages.
pub fn from_str_with_path<T: DeserializeOwned>(src: &str) -> Result<T> {
    let de = &mut serde_json::Deserializer::from_str(src);
    match serde_path_to_error::deserialize::<_, T>(de) {
        Ok(v) => Ok(v),
        Err(err) => {
            let path = err.path().to_string();
            bail!("at JSON path {path}: {}", err.into_inner())
        }
    }
}

/// Parse one source into documents: whole-text JSON, or one document per
/// non-blank line with `ndjson`.
pub fn json_documents(text: &str, ndjson: bool, label: &str) -> Result<Vec<Value>> {
    if !ndjson {
        let value = from_str_with_path::<Value>(text).with_context(|| label.to_string())?;
        return Ok(vec![value]);
    }
    let mut docs = Vec::new();
    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let value = from_str_with_path::<Value>(line)
            .with_context(|| format!("{label}:{}", lineno + 1))?;
        docs.push(value);
    }
    Ok(docs)
}

/// Select a subnode of a document before inference.
pub fn select_pointer(doc: &Value, pointer: &str, label: &str) -> Result<Value> {
    doc.pointer(pointer)
        .cloned()
        .with_context(|| format!("{label}: JSON pointer {pointer} matched nothing"))
}

/// Materialize CSV records as flat objects with header-derived keys, one per
/// row. Cells are coerced before the core ever sees them; an empty cell
/// means the field is absent from that row, a literal `null` is an explicit
/// null value.
pub fn csv_rows(text: &str, label: &str) -> Result<Vec<Value>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .with_context(|| format!("{label}: failed to read CSV header"))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        bail!("{label}: CSV input has no header row");
    }

    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record =
            record.with_context(|| format!("{label}: malformed CSV record {}", idx + 2))?;
        let mut row = serde_json::Map::new();
        for (header, cell) in headers.iter().zip(record.iter()) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }
            row.insert(header.clone(), coerce_cell(cell));
        }
        rows.push(Value::Object(row));
    }
    Ok(rows)
}

/// Coerce a CSV cell the way a JSON reader would have typed it: booleans and
/// numbers become typed values, everything else stays a string.
pub fn coerce_cell(cell: &str) -> Value {
    if cell.eq_ignore_ascii_case("null") {
        return Value::Null;
    }
    if cell.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if cell.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(i) = cell.parse::<i64>() {
        return Value::from(i);
    }
    if let Ok(f) = cell.parse::<f64>() {
        // "inf"/"nan" parse but are not JSON numbers; keep those as strings
        if f.is_finite() {
            return Value::from(f);
        }
    }
    Value::from(cell)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn whole_text_yields_a_single_document() {
        let docs = json_documents(r#"{"a": 1}"#, false, "test").unwrap();
        assert_eq!(docs, vec![json!({ "a": 1 })]);
    }

    #[test]
    fn ndjson_yields_one_document_per_line() {
        let docs = json_documents("{\"a\": 1}\n\n{\"a\": 2}\n", true, "test").unwrap();
        assert_eq!(docs, vec![json!({ "a": 1 }), json!({ "a": 2 })]);
    }

    #[test]
    fn parse_errors_carry_the_json_path() {
        let err = json_documents(r#"{"a": {"b": [1, }]}}"#, false, "test").unwrap_err();
        assert!(format!("{err:#}").contains("a.b"), "{err:#}");
    }

    #[test]
    fn pointer_selects_a_subnode() {
        let doc = json!({ "data": { "items": [1, 2] } });
        assert_eq!(select_pointer(&doc, "/data/items", "test").unwrap(), json!([1, 2]));
        assert!(select_pointer(&doc, "/missing", "test").is_err());
    }

    #[test]
    fn csv_rows_become_coerced_objects() {
        let rows = csv_rows("name,age,active\nalice,30,true\nbob,,false\n", "test").unwrap();
        assert_eq!(
            rows,
            vec![
                json!({ "name": "alice", "age": 30, "active": true }),
                json!({ "name": "bob", "active": false }),
            ]
        );
    }

    #[test]
    fn cell_coercion_covers_the_value_kinds() {
        assert_eq!(coerce_cell("null"), Value::Null);
        assert_eq!(coerce_cell("TRUE"), json!(true));
        assert_eq!(coerce_cell("-12"), json!(-12));
        assert_eq!(coerce_cell("3.25"), json!(3.25));
        assert_eq!(coerce_cell("nan"), json!("nan"));
        assert_eq!(coerce_cell("hello world"), json!("hello world"));
    }

    #[test]
    fn literal_paths_pass_through_and_dash_is_stdin() {
        let sources = resolve_input_patterns(["-", "data/sample.json"]).unwrap();
        assert!(matches!(sources[0], InputSource::Stdin));
        assert!(matches!(&sources[1], InputSource::File(p) if p.ends_with("sample.json")));
    }
}
