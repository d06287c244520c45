use std::collections::HashSet;

use csv::{ReaderBuilder, Trim};
use serde_json::Value;

use datagenesis_core::{Error, Result, Row};

use crate::adapter::{Adapter, DecodedUpload};

/// Reads comma-separated uploads whose first line is the header.
///
/// Values are matched to header names by position. Missing trailing values
/// become empty strings, extra values are ignored, and rows whose values are
/// all empty are dropped. Values stay strings; no coercion happens here.
///
/// Blank header cells are named `column_<position>` and repeated names get a
/// `_<n>` suffix, so columns and row keys always agree.
pub struct CsvAdapter;

impl Adapter for CsvAdapter {
    fn format(&self) -> &'static str {
        "csv"
    }

    fn decode(&self, text: &str) -> Result<DecodedUpload> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(text.as_bytes());

        let headers = normalize_headers(
            reader
                .headers()
                .map_err(|err| Error::Parse(format!("invalid csv header: {err}")))?
                .iter(),
        );

        let mut rows = Vec::new();
        for (line, record) in reader.records().enumerate() {
            let record =
                record.map_err(|err| Error::Parse(format!("invalid csv row {}: {err}", line + 2)))?;
            let values: Vec<&str> = (0..headers.len())
                .map(|index| record.get(index).unwrap_or_default())
                .collect();
            if values.iter().all(|value| value.is_empty()) {
                continue;
            }

            let row: Row = headers
                .iter()
                .zip(values)
                .map(|(name, value)| (name.clone(), Value::String(value.to_string())))
                .collect();
            rows.push(row);
        }

        Ok(DecodedUpload {
            columns: headers,
            rows,
        })
    }
}

fn normalize_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut headers = Vec::new();
    for (index, name) in raw.enumerate() {
        let base = if name.is_empty() {
            format!("column_{}", index + 1)
        } else {
            name.to_string()
        };
        let mut candidate = base.clone();
        let mut suffix = 2;
        while !seen.insert(candidate.clone()) {
            candidate = format!("{base}_{suffix}");
            suffix += 1;
        }
        headers.push(candidate);
    }
    headers
}
