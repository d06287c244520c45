//! Request contracts and validation for schema and dataset generation.

pub mod errors;
pub mod model;
pub mod schema;
pub mod validate;

pub use errors::{IssueSeverity, RequestError, Result, ValidationIssue, ValidationReport};
pub use model::{DEFAULT_ROW_COUNT, GenerationRequest, MAX_ROW_COUNT, SchemaRequest};
pub use schema::generation_request_json_schema;
pub use validate::{
    ValidatedRequest, parse_generation_request, validate_generation_request,
    validate_request_json, validate_schema_request,
};
