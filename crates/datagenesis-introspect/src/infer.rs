use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

use datagenesis_core::{FieldDescriptor, FieldType, Row, Schema};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Build a schema from decoded columns, typing each field from its value in
/// the first row only. Columns without a sample value are typed `string`.
///
/// Later rows are never consulted, so they may disagree with the result.
pub fn infer_schema(columns: &[String], rows: &[Row]) -> Schema {
    let first = rows.first();
    columns
        .iter()
        .map(|name| {
            let field_type = first
                .and_then(|row| row.get(name))
                .map(infer_field_type)
                .unwrap_or(FieldType::String);
            FieldDescriptor::new(name.clone(), field_type)
        })
        .collect()
}

/// Infer a field type from one sample value.
///
/// Precedence: number, then boolean, then date, then string.
pub fn infer_field_type(value: &Value) -> FieldType {
    match value {
        Value::Number(_) => FieldType::Number,
        Value::Bool(_) => FieldType::Boolean,
        Value::String(text) => infer_text_type(text),
        Value::Null | Value::Array(_) | Value::Object(_) => FieldType::String,
    }
}

fn infer_text_type(text: &str) -> FieldType {
    let text = text.trim();
    if is_number(text) {
        FieldType::Number
    } else if text == "true" || text == "false" {
        FieldType::Boolean
    } else if is_date(text) {
        FieldType::Date
    } else {
        FieldType::String
    }
}

fn is_number(text: &str) -> bool {
    !text.is_empty() && text.parse::<f64>().is_ok_and(f64::is_finite)
}

fn is_date(text: &str) -> bool {
    if text.is_empty() {
        return false;
    }
    if DateTime::parse_from_rfc3339(text).is_ok() {
        return true;
    }
    if DATETIME_FORMATS
        .iter()
        .any(|format| NaiveDateTime::parse_from_str(text, format).is_ok())
    {
        return true;
    }
    DATE_FORMATS
        .iter()
        .any(|format| NaiveDate::parse_from_str(text, format).is_ok())
}
