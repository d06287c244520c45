use std::fmt;

use schemars::JsonSchema;
use schemars::r#gen::SchemaGenerator;
use serde::{Deserialize, Serialize};

/// Declared type of a field.
///
/// Only the first four kinds are produced by inference; `Other` keeps any tag
/// a remote schema may carry (`email`, `uuid`, ...) so downstream code stays
/// total over malformed descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    String,
    Number,
    Boolean,
    Date,
    Other(String),
}

impl FieldType {
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "string" => FieldType::String,
            "number" => FieldType::Number,
            "boolean" => FieldType::Boolean,
            "date" => FieldType::Date,
            _ => FieldType::Other(tag.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FieldType::String => "string",
            FieldType::Number => "number",
            FieldType::Boolean => "boolean",
            FieldType::Date => "date",
            FieldType::Other(tag) => tag.as_str(),
        }
    }
}

impl From<String> for FieldType {
    fn from(value: String) -> Self {
        FieldType::from_tag(&value)
    }
}

impl From<FieldType> for String {
    fn from(value: FieldType) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for FieldType {
    fn schema_name() -> String {
        "FieldType".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

/// Coarse business category used to pick a canned schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Domain {
    Healthcare,
    Finance,
    Retail,
    Generic,
}

impl Domain {
    /// Parse a domain tag; anything unrecognized maps to `Generic`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "healthcare" => Domain::Healthcare,
            "finance" => Domain::Finance,
            "retail" => Domain::Retail,
            _ => Domain::Generic,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Healthcare => "healthcare",
            Domain::Finance => "finance",
            Domain::Retail => "retail",
            Domain::Generic => "generic",
        }
    }
}

impl From<String> for Domain {
    fn from(value: String) -> Self {
        Domain::from_tag(&value)
    }
}

impl From<Domain> for String {
    fn from(value: Domain) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl JsonSchema for Domain {
    fn schema_name() -> String {
        "Domain".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> schemars::schema::Schema {
        String::json_schema(generator)
    }
}

/// Provenance of a generated dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationMethod {
    /// Rows were produced by the remote backend.
    BackendLocal,
    /// Rows were fabricated by the local placeholder synthesizer.
    LocalFallback,
}

impl GenerationMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationMethod::BackendLocal => "backend_local",
            GenerationMethod::LocalFallback => "local_fallback",
        }
    }
}

impl fmt::Display for GenerationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
