use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use datagenesis_core::{Row, Schema};

use crate::errors::{RemoteError, Result};

/// Health check body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub healthy: bool,
    #[serde(default)]
    pub services: BTreeMap<String, ServiceStatus>,
}

/// Status of one backend service as reported by the health check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceStatus {
    pub status: String,
}

/// Coarse connection state shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    Online,
    Offline,
}

impl fmt::Display for ConnectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionStatus::Online => f.write_str("online"),
            ConnectionStatus::Offline => f.write_str("offline"),
        }
    }
}

/// Schema-from-description response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaResponse {
    #[serde(default)]
    pub schema: Schema,
    #[serde(default, alias = "sample_data")]
    pub sample_data: Vec<Row>,
    #[serde(default, alias = "detected_domain", skip_serializing_if = "Option::is_none")]
    pub detected_domain: Option<String>,
}

impl SchemaResponse {
    /// A response without fields counts as a failed call.
    pub fn ensure_usable(self) -> Result<Self> {
        if self.schema.is_empty() {
            return Err(RemoteError::Malformed("schema has no fields".to_string()));
        }
        Ok(self)
    }
}

/// Generate-dataset response body.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub data: Vec<Row>,
    #[serde(default, alias = "quality_score", skip_serializing_if = "Option::is_none")]
    pub quality_score: Option<f64>,
    #[serde(default, alias = "privacy_score", skip_serializing_if = "Option::is_none")]
    pub privacy_score: Option<f64>,
    #[serde(default, alias = "bias_score", skip_serializing_if = "Option::is_none")]
    pub bias_score: Option<f64>,
}

impl GenerateResponse {
    /// A response without rows counts as a failed call.
    pub fn ensure_usable(self) -> Result<Self> {
        if self.data.is_empty() {
            return Err(RemoteError::Malformed("data is empty".to_string()));
        }
        Ok(self)
    }
}
