use std::path::Path;

use datagenesis_core::{Result, Row};

use crate::csv::CsvAdapter;
use crate::json::JsonAdapter;

/// Upload format, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadFormat {
    Csv,
    Json,
}

impl UploadFormat {
    /// `.json` selects JSON; every other extension is read as CSV.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => UploadFormat::Json,
            _ => UploadFormat::Csv,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UploadFormat::Csv => "csv",
            UploadFormat::Json => "json",
        }
    }
}

/// Column names and rows decoded from an upload.
#[derive(Debug, Clone, Default)]
pub struct DecodedUpload {
    /// Field names in upload order.
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

/// Trait implemented by upload decoders that turn text into rows.
pub trait Adapter {
    /// Returns the format identifier (e.g. `csv`).
    fn format(&self) -> &'static str;

    /// Decode the upload into columns and rows.
    fn decode(&self, text: &str) -> Result<DecodedUpload>;
}

pub fn adapter_for(format: UploadFormat) -> Box<dyn Adapter + Send + Sync> {
    match format {
        UploadFormat::Csv => Box::new(CsvAdapter),
        UploadFormat::Json => Box::new(JsonAdapter),
    }
}
