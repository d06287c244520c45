use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use datagenesis_core::{Domain, Row, Schema};

/// Rows generated when a request leaves `rowCount` unset.
pub const DEFAULT_ROW_COUNT: u64 = 1000;

/// Default ceiling on `rowCount`; larger requests are rejected up front.
pub const MAX_ROW_COUNT: u64 = 1_000_000;

/// Ask the backend to turn a natural-language description into a schema.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct SchemaRequest {
    pub description: String,
    pub domain: String,
    pub data_type: String,
}

impl SchemaRequest {
    pub fn domain(&self) -> Domain {
        Domain::from_tag(&self.domain)
    }
}

/// Dataset generation request, as sent to the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct GenerationRequest {
    /// Business domain tag (healthcare, finance, retail, ...).
    pub domain: String,
    /// Shape of the data, e.g. `tabular`.
    pub data_type: String,
    /// Uploaded rows the generation should resemble.
    #[serde(rename = "sourceData", default)]
    pub source_data: Vec<Row>,
    /// Target schema; may be empty when only source data is known.
    #[serde(default)]
    pub schema: Schema,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "rowCount", default, skip_serializing_if = "Option::is_none")]
    pub row_count: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub privacy_level: Option<String>,
}

impl GenerationRequest {
    pub fn domain(&self) -> Domain {
        Domain::from_tag(&self.domain)
    }

    /// Requested row count, or [`DEFAULT_ROW_COUNT`].
    pub fn effective_row_count(&self) -> u64 {
        self.row_count.unwrap_or(DEFAULT_ROW_COUNT)
    }
}
