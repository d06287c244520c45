//! Local placeholder data generation for DataGenesis.
//!
//! This crate fabricates rows from a type-tagged schema, provides canned
//! per-domain schemas for when the remote schema service is unreachable, and
//! encodes datasets as CSV or JSON.

pub mod engine;
pub mod errors;
pub mod generators;
pub mod model;
pub mod output;

pub use engine::RowSynthesizer;
pub use errors::GenerationError;
pub use generators::domain::canned_schema;
pub use model::{FallbackSchema, SynthesizeOptions};
pub use output::{ExportArtifact, ExportFormat, artifact_file_name, encode};
