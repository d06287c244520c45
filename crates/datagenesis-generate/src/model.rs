use serde::{Deserialize, Serialize};

use datagenesis_core::{Domain, Row, Schema};

/// Options for the row synthesizer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SynthesizeOptions {
    /// Fixed seed for reproducible output; a random seed is drawn when unset.
    pub seed: Option<u64>,
}

/// Canned schema plus preview rows for a domain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackSchema {
    pub schema: Schema,
    pub sample_data: Vec<Row>,
    pub detected_domain: Domain,
}
