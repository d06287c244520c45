use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use datagenesis_core::{Dataset, Domain, Row, Schema};

use crate::errors::GenerationError;
use crate::generators::domain::canned_schema;
use crate::generators::synthesize_value;
use crate::model::{FallbackSchema, SynthesizeOptions};

/// Rows returned with a fallback schema for preview.
pub const SAMPLE_ROWS: usize = 3;

/// Placeholder row generator driven by a schema.
///
/// Output is a pure function of the schema, the row count, the seed and the
/// reference clock. No cross-field correlation or uniqueness is attempted
/// beyond the ordinal embedded in string values.
#[derive(Debug, Clone)]
pub struct RowSynthesizer {
    rng: ChaCha8Rng,
    now: DateTime<Utc>,
}

impl RowSynthesizer {
    pub fn new(options: &SynthesizeOptions) -> Self {
        let seed = options.seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            now: Utc::now(),
        }
    }

    /// Pin the instant generated dates count back from.
    pub fn with_clock(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Generate `rows` rows, each carrying exactly the schema's fields.
    ///
    /// Fails without generating anything when the row buffer cannot be
    /// allocated.
    pub fn synthesize(&mut self, schema: &Schema, rows: usize) -> Result<Dataset, GenerationError> {
        debug!(fields = schema.len(), rows, "synthesizing rows");
        let mut out: Vec<Row> = Vec::new();
        out.try_reserve_exact(rows)
            .map_err(|source| GenerationError::Allocation { rows, source })?;
        for ordinal in 0..rows {
            out.push(self.synthesize_row(schema, ordinal));
        }
        Ok(out.into())
    }

    /// Canned schema for `domain` plus three preview rows.
    pub fn fallback_schema(&mut self, domain: Domain) -> Result<FallbackSchema, GenerationError> {
        let schema = canned_schema(domain);
        let sample_data = self.synthesize(&schema, SAMPLE_ROWS)?.into_rows();
        Ok(FallbackSchema {
            schema,
            sample_data,
            detected_domain: domain,
        })
    }

    fn synthesize_row(&mut self, schema: &Schema, ordinal: usize) -> Row {
        let mut row = Row::new();
        for field in schema {
            let value = synthesize_value(field, ordinal, self.now, &mut self.rng);
            row.insert(field.name.clone(), value);
        }
        row
    }
}
