//! Core contracts and helpers for DataGenesis.
//!
//! This crate defines the schema, row and dataset types shared by the
//! inference, generation, remote and orchestration crates.

pub mod dataset;
pub mod error;
pub mod schema;
pub mod types;
pub mod validation;

pub use dataset::{Dataset, Row};
pub use error::{Error, Result};
pub use schema::{FieldDescriptor, Schema};
pub use types::{Domain, FieldType, GenerationMethod};
pub use validation::validate_dataset;
