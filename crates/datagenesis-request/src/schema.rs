use schemars::schema::RootSchema;
use schemars::schema_for;

use crate::model::GenerationRequest;

/// Emit the JSON Schema for generation request documents.
pub fn generation_request_json_schema() -> RootSchema {
    schema_for!(GenerationRequest)
}
