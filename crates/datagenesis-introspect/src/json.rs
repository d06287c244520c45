use serde_json::Value;

use datagenesis_core::{Error, Result, Row};

use crate::adapter::{Adapter, DecodedUpload};

/// Reads uploads holding a JSON array of objects.
///
/// An empty-string key is renamed `column_<position>`, matching the CSV reader.
pub struct JsonAdapter;

impl Adapter for JsonAdapter {
    fn format(&self) -> &'static str {
        "json"
    }

    fn decode(&self, text: &str) -> Result<DecodedUpload> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| Error::Parse(format!("invalid json: {err}")))?;

        let Value::Array(items) = value else {
            return Err(Error::Parse(
                "json upload must be an array of objects".to_string(),
            ));
        };

        let rows = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(row) => Ok(name_blank_key(row)),
                other => Err(Error::Parse(format!(
                    "json element {index} is not an object: {other}"
                ))),
            })
            .collect::<Result<Vec<Row>>>()?;

        let columns = rows
            .first()
            .map(|row| row.keys().cloned().collect())
            .unwrap_or_default();

        Ok(DecodedUpload { columns, rows })
    }
}

fn name_blank_key(row: Row) -> Row {
    if !row.contains_key("") {
        return row;
    }
    row.into_iter()
        .enumerate()
        .map(|(index, (name, value))| {
            if name.is_empty() {
                (format!("column_{}", index + 1), value)
            } else {
                (name, value)
            }
        })
        .collect()
}
