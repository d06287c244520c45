use datagenesis_core::Dataset;

use crate::errors::GenerationError;

/// Encode a dataset as a pretty-printed JSON array (2-space indent).
pub fn encode_json(dataset: &Dataset) -> Result<String, GenerationError> {
    Ok(serde_json::to_string_pretty(dataset.rows())?)
}
