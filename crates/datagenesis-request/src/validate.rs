use datagenesis_core::FieldType;
use jsonschema::JSONSchema;
use serde_json::Value;

use crate::errors::{RequestError, ValidationIssue, ValidationReport};
use crate::model::{GenerationRequest, SchemaRequest};
use crate::schema::generation_request_json_schema;

/// Parsed generation request with accumulated warnings.
#[derive(Debug, Clone)]
pub struct ValidatedRequest {
    pub request: GenerationRequest,
    pub warnings: Vec<ValidationIssue>,
}

/// Validate a schema-from-description request before anything is invoked.
pub fn validate_schema_request(request: &SchemaRequest) -> ValidationReport {
    let mut report = ValidationReport::default();

    if request.description.trim().is_empty() {
        report.push_error(ValidationIssue::error(
            "empty_description",
            "/description",
            "description is empty",
            Some("describe the dataset you want, e.g. \"patients with admission dates\"".to_string()),
        ));
    }
    check_selection(&request.domain, &request.data_type, &mut report);

    report
}

/// Validate a generation request before the remote or local path runs.
///
/// Requests asking for more than `max_row_count` rows (after defaulting) are
/// rejected.
pub fn validate_generation_request(
    request: &GenerationRequest,
    max_row_count: u64,
) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_selection(&request.domain, &request.data_type, &mut report);

    let rows = request.effective_row_count();
    if rows > max_row_count {
        report.push_error(ValidationIssue::error(
            "too_many_rows",
            "/rowCount",
            format!("rowCount {rows} exceeds the limit of {max_row_count}"),
            Some("request fewer rows or raise generation.max_row_count".to_string()),
        ));
    }

    if request.row_count == Some(0) {
        report.push_warning(ValidationIssue::warning(
            "zero_rows",
            "/rowCount",
            "rowCount is 0; the dataset will be empty",
        ));
    }

    for field in &request.schema {
        if let FieldType::Other(tag) = &field.field_type {
            report.push_warning(ValidationIssue::warning(
                "unknown_field_type",
                format!("/schema/{}", field.name),
                format!(
                    "field '{}' has type '{tag}'; local generation will use placeholder text",
                    field.name
                ),
            ));
        }
    }

    if request.schema.is_empty() && request.source_data.is_empty() {
        report.push_warning(ValidationIssue::warning(
            "no_schema",
            "/schema",
            format!(
                "no schema or source data; local generation will use the {} template",
                request.domain()
            ),
        ));
    }

    report
}

/// Validate a request JSON document against the request JSON Schema.
pub fn validate_request_json(
    request_json: &Value,
    request_schema: &Value,
) -> Result<ValidationReport, RequestError> {
    let compiled =
        JSONSchema::compile(request_schema).map_err(|err| RequestError::Schema(err.to_string()))?;

    let mut report = ValidationReport::default();

    if let Err(errors) = compiled.validate(request_json) {
        for error in errors {
            let path = normalized_json_pointer(&error.instance_path.to_string());
            report.push_error(ValidationIssue::error(
                "schema_violation",
                path,
                error.to_string(),
                None,
            ));
        }
    }

    Ok(report)
}

/// Validate a request document end-to-end, returning structured issues on failure.
pub fn parse_generation_request(
    request_json: &Value,
    max_row_count: u64,
) -> Result<ValidatedRequest, ValidationReport> {
    let request_schema = match serde_json::to_value(generation_request_json_schema()) {
        Ok(value) => value,
        Err(err) => return Err(single_error("schema_validation_error", err.to_string())),
    };

    let structural = match validate_request_json(request_json, &request_schema) {
        Ok(report) => report,
        Err(err) => return Err(single_error("schema_validation_error", err.to_string())),
    };
    if !structural.is_ok() {
        return Err(structural);
    }

    let request: GenerationRequest = match serde_json::from_value(request_json.clone()) {
        Ok(request) => request,
        Err(err) => return Err(single_error("invalid_request_json", err.to_string())),
    };

    let semantic = validate_generation_request(&request, max_row_count);
    if !semantic.is_ok() {
        return Err(semantic);
    }

    Ok(ValidatedRequest {
        request,
        warnings: semantic.warnings,
    })
}

fn check_selection(domain: &str, data_type: &str, report: &mut ValidationReport) {
    if domain.trim().is_empty() {
        report.push_error(ValidationIssue::error(
            "missing_domain",
            "/domain",
            "no domain selected",
            Some("choose healthcare, finance, retail or another domain".to_string()),
        ));
    }
    if data_type.trim().is_empty() {
        report.push_error(ValidationIssue::error(
            "missing_data_type",
            "/data_type",
            "no data type selected",
            Some("choose a data type such as tabular".to_string()),
        ));
    }
}

fn single_error(code: &str, message: String) -> ValidationReport {
    let mut report = ValidationReport::default();
    report.push_error(ValidationIssue::error(code, "/", message, None));
    report
}

fn normalized_json_pointer(pointer: &str) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer.to_string()
    }
}
