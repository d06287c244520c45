use std::fmt;

use chrono::{DateTime, Utc};

use datagenesis_core::Dataset;

use crate::errors::GenerationError;

pub mod artifact;
pub mod csv;
pub mod json;

pub use artifact::ExportArtifact;

/// Target encoding for an exported dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    /// Parse a format tag; anything other than `csv` means JSON.
    pub fn from_tag(tag: &str) -> Self {
        if tag.trim().eq_ignore_ascii_case("csv") {
            ExportFormat::Csv
        } else {
            ExportFormat::Json
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Json => "application/json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Encode a dataset in the requested format.
pub fn encode(dataset: &Dataset, format: ExportFormat) -> Result<String, GenerationError> {
    match format {
        ExportFormat::Csv => Ok(csv::encode_csv(dataset)),
        ExportFormat::Json => json::encode_json(dataset),
    }
}

/// Download name for an export: `synthetic-data-<unix-epoch-ms>.<ext>`.
pub fn artifact_file_name(format: ExportFormat, at: DateTime<Utc>) -> String {
    format!(
        "synthetic-data-{}.{}",
        at.timestamp_millis(),
        format.extension()
    )
}
