use serde_json::Value;

use datagenesis_core::Dataset;

/// Encode a dataset as CSV text.
///
/// The header is the key order of the first row. String values are wrapped in
/// double quotes verbatim; embedded quotes and commas are not escaped, so
/// output containing them will not re-parse cleanly. Missing and null values
/// are written as empty fields. An empty dataset encodes to an empty string.
pub fn encode_csv(dataset: &Dataset) -> String {
    if dataset.is_empty() {
        return String::new();
    }
    let header = dataset.header();

    let mut lines = Vec::with_capacity(dataset.len() + 1);
    lines.push(header.join(","));

    for row in dataset.rows() {
        let record: Vec<String> = header
            .iter()
            .map(|key| row.get(*key).map(render_value).unwrap_or_default())
            .collect();
        lines.push(record.join(","));
    }

    lines.join("\n")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => format!("\"{text}\""),
        Value::Null => String::new(),
        Value::Bool(value) => value.to_string(),
        Value::Number(value) => value.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
