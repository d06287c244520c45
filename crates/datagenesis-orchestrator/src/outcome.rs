use chrono::{DateTime, Utc};
use serde::Serialize;

use datagenesis_core::{Dataset, Domain, GenerationMethod, Row, Schema};
use datagenesis_remote::GenerateResponse;

use crate::progress::RequestId;

/// Result of a path that always produces something: either the backend
/// answered, or the local fallback filled in.
#[derive(Debug, Clone)]
pub enum Outcome<T> {
    Remote(T),
    Fallback(T),
}

impl<T> Outcome<T> {
    pub fn method(&self) -> GenerationMethod {
        match self {
            Outcome::Remote(_) => GenerationMethod::BackendLocal,
            Outcome::Fallback(_) => GenerationMethod::LocalFallback,
        }
    }

    pub fn get(&self) -> &T {
        match self {
            Outcome::Remote(value) | Outcome::Fallback(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Outcome::Remote(value) | Outcome::Fallback(value) => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

/// Quality, privacy and bias scores, each 0..=100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scores {
    pub quality: u8,
    pub privacy: u8,
    pub bias: u8,
}

impl Scores {
    /// Fixed scores for placeholder data.
    pub const FALLBACK: Scores = Scores {
        quality: 85,
        privacy: 90,
        bias: 88,
    };

    /// Used for any score the backend leaves out.
    pub const REMOTE_DEFAULT: Scores = Scores {
        quality: 95,
        privacy: 98,
        bias: 92,
    };

    pub fn from_response(response: &GenerateResponse) -> Self {
        let defaults = Scores::REMOTE_DEFAULT;
        Self {
            quality: score_or(response.quality_score, defaults.quality),
            privacy: score_or(response.privacy_score, defaults.privacy),
            bias: score_or(response.bias_score, defaults.bias),
        }
    }
}

fn score_or(value: Option<f64>, default: u8) -> u8 {
    match value {
        Some(score) if score.is_finite() => score.round().clamp(0.0, 100.0) as u8,
        _ => default,
    }
}

/// A generated dataset with provenance and scores.
///
/// Row and column counts are derived from the dataset itself.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    request_id: RequestId,
    dataset: Dataset,
    rows_generated: usize,
    columns_generated: usize,
    generation_method: GenerationMethod,
    quality_score: u8,
    privacy_score: u8,
    bias_score: u8,
    generated_at: DateTime<Utc>,
}

impl GenerationResult {
    /// `schema_fields` is used for the column count only when the dataset is
    /// empty; otherwise the first row's keys are counted.
    pub fn new(
        request_id: RequestId,
        dataset: Dataset,
        schema_fields: usize,
        method: GenerationMethod,
        scores: Scores,
    ) -> Self {
        let columns_generated = if dataset.is_empty() {
            schema_fields
        } else {
            dataset.header().len()
        };
        Self {
            request_id,
            rows_generated: dataset.len(),
            columns_generated,
            dataset,
            generation_method: method,
            quality_score: scores.quality,
            privacy_score: scores.privacy,
            bias_score: scores.bias,
            generated_at: Utc::now(),
        }
    }

    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn rows_generated(&self) -> usize {
        self.rows_generated
    }

    pub fn columns_generated(&self) -> usize {
        self.columns_generated
    }

    pub fn generation_method(&self) -> GenerationMethod {
        self.generation_method
    }

    pub fn scores(&self) -> Scores {
        Scores {
            quality: self.quality_score,
            privacy: self.privacy_score,
            bias: self.bias_score,
        }
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }
}

/// Schema offered to the user, with preview rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaProposal {
    pub schema: Schema,
    pub sample_data: Vec<Row>,
    pub detected_domain: Domain,
}
