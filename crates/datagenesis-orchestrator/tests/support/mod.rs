#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Notify;

use datagenesis_core::Row;
use datagenesis_orchestrator::{Orchestrator, OrchestratorOptions};
use datagenesis_remote::{
    Backend, GenerateResponse, HealthReport, RemoteError, SchemaResponse,
};
use datagenesis_request::{GenerationRequest, SchemaRequest};

pub fn orchestrator(backend: Arc<dyn Backend>) -> Orchestrator {
    Orchestrator::new(
        backend,
        OrchestratorOptions {
            seed: Some(7),
            ..Default::default()
        },
    )
}

/// Orchestrator whose row cap lets any count through to local synthesis.
pub fn uncapped_orchestrator(backend: Arc<dyn Backend>) -> Orchestrator {
    Orchestrator::new(
        backend,
        OrchestratorOptions {
            seed: Some(7),
            max_row_count: u64::MAX,
            ..Default::default()
        },
    )
}

pub fn generation_request(domain: &str, rows: Option<u64>) -> GenerationRequest {
    GenerationRequest {
        domain: domain.to_string(),
        data_type: "tabular".to_string(),
        row_count: rows,
        ..Default::default()
    }
}

pub fn schema_request(domain: &str) -> SchemaRequest {
    SchemaRequest {
        description: "monthly statements for retail bank customers".to_string(),
        domain: domain.to_string(),
        data_type: "tabular".to_string(),
    }
}

pub fn rows(count: usize) -> Vec<Row> {
    (0..count)
        .map(|i| {
            json!({"id": i, "label": format!("row {i}")})
                .as_object()
                .cloned()
                .expect("object")
        })
        .collect()
}

/// Backend whose every call fails.
pub struct FailingBackend;

#[async_trait]
impl Backend for FailingBackend {
    fn name(&self) -> &str {
        "failing"
    }

    async fn health(&self) -> datagenesis_remote::Result<HealthReport> {
        Err(RemoteError::Status(503))
    }

    async fn schema_from_description(
        &self,
        _request: &SchemaRequest,
    ) -> datagenesis_remote::Result<SchemaResponse> {
        Err(RemoteError::Status(503))
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> datagenesis_remote::Result<GenerateResponse> {
        Err(RemoteError::Malformed("not json".to_string()))
    }
}

/// Backend returning a fixed response.
pub struct FixedBackend {
    pub response: GenerateResponse,
}

#[async_trait]
impl Backend for FixedBackend {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn health(&self) -> datagenesis_remote::Result<HealthReport> {
        Ok(HealthReport {
            healthy: true,
            services: Default::default(),
        })
    }

    async fn schema_from_description(
        &self,
        _request: &SchemaRequest,
    ) -> datagenesis_remote::Result<SchemaResponse> {
        let body = json!({
            "schema": {"ticker": {"type": "string"}, "price": {"type": "number"}},
            "sampleData": [{"ticker": "ACME", "price": 12.5}],
            "detectedDomain": "finance"
        });
        serde_json::from_value(body).map_err(|err| RemoteError::Malformed(err.to_string()))
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> datagenesis_remote::Result<GenerateResponse> {
        Ok(self.response.clone())
    }
}

/// Backend that holds its first `generate` call until released.
#[derive(Default)]
pub struct GatedBackend {
    calls: AtomicUsize,
    fail_first: bool,
    pub entered: Notify,
    pub release: Notify,
}

impl GatedBackend {
    /// The held call fails once released instead of returning rows.
    pub fn failing_first() -> Self {
        Self {
            fail_first: true,
            ..Default::default()
        }
    }
}

#[async_trait]
impl Backend for GatedBackend {
    fn name(&self) -> &str {
        "gated"
    }

    async fn health(&self) -> datagenesis_remote::Result<HealthReport> {
        Err(RemoteError::Offline)
    }

    async fn schema_from_description(
        &self,
        _request: &SchemaRequest,
    ) -> datagenesis_remote::Result<SchemaResponse> {
        Err(RemoteError::Offline)
    }

    async fn generate(
        &self,
        _request: &GenerationRequest,
    ) -> datagenesis_remote::Result<GenerateResponse> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call == 0 {
            self.entered.notify_one();
            self.release.notified().await;
            if self.fail_first {
                return Err(RemoteError::Status(502));
            }
            return Ok(response(rows(2)));
        }
        Ok(response(rows(5)))
    }
}

pub fn response(data: Vec<Row>) -> GenerateResponse {
    GenerateResponse {
        data,
        quality_score: None,
        privacy_score: None,
        bias_score: None,
    }
}
