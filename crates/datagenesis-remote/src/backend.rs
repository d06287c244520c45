use async_trait::async_trait;

use datagenesis_request::{GenerationRequest, SchemaRequest};

use crate::errors::{RemoteError, Result};
use crate::model::{GenerateResponse, HealthReport, SchemaResponse};

/// Trait implemented by remote generation backends.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Identifier used in logs.
    fn name(&self) -> &str;

    /// Probe backend health.
    async fn health(&self) -> Result<HealthReport>;

    /// Turn a natural-language description into a schema with sample rows.
    async fn schema_from_description(&self, request: &SchemaRequest) -> Result<SchemaResponse>;

    /// Generate a dataset.
    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse>;
}

/// Backend used when remote access is disabled; every call is unavailable.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineBackend;

#[async_trait]
impl Backend for OfflineBackend {
    fn name(&self) -> &str {
        "offline"
    }

    async fn health(&self) -> Result<HealthReport> {
        Err(RemoteError::Offline)
    }

    async fn schema_from_description(&self, _request: &SchemaRequest) -> Result<SchemaResponse> {
        Err(RemoteError::Offline)
    }

    async fn generate(&self, _request: &GenerationRequest) -> Result<GenerateResponse> {
        Err(RemoteError::Offline)
    }
}
