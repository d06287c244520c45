use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use datagenesis_remote::{
    Backend, ConnectionStatus, GenerateResponse, HealthCache, HealthReport, HttpBackend,
    HttpBackendConfig, OfflineBackend, RemoteError, SchemaResponse, ServiceStatus,
};
use datagenesis_request::{GenerationRequest, SchemaRequest};

fn unreachable_backend() -> HttpBackend {
    HttpBackend::new(HttpBackendConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        timeout: Duration::from_secs(2),
        ..HttpBackendConfig::default()
    })
    .expect("build client")
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_error() {
    let backend = unreachable_backend();
    let err = backend
        .generate(&GenerationRequest::default())
        .await
        .expect_err("nothing listens on port 1");
    assert!(matches!(err, RemoteError::Transport(_)));
}

#[tokio::test]
async fn offline_backend_refuses_every_call() {
    let backend = OfflineBackend;
    assert!(matches!(
        backend.schema_from_description(&SchemaRequest::default()).await,
        Err(RemoteError::Offline)
    ));
    assert!(matches!(backend.health().await, Err(RemoteError::Offline)));
}

struct CountingBackend {
    health_checks: AtomicUsize,
    healthy: bool,
}

#[async_trait]
impl Backend for CountingBackend {
    fn name(&self) -> &str {
        "counting"
    }

    async fn health(&self) -> datagenesis_remote::Result<HealthReport> {
        self.health_checks.fetch_add(1, Ordering::SeqCst);
        let mut services = BTreeMap::new();
        services.insert(
            "gemini".to_string(),
            ServiceStatus {
                status: "online".to_string(),
            },
        );
        Ok(HealthReport {
            healthy: self.healthy,
            services,
        })
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
        Err(RemoteError::Offline)
    }
}

#[tokio::test]
async fn health_check_is_cached_within_ttl() {
    let backend = Arc::new(CountingBackend {
        health_checks: AtomicUsize::new(0),
        healthy: true,
    });
    let cache = HealthCache::new(Duration::from_secs(300));

    assert_eq!(cache.status(backend.as_ref()).await, ConnectionStatus::Online);
    assert_eq!(cache.status(backend.as_ref()).await, ConnectionStatus::Online);
    assert_eq!(backend.health_checks.load(Ordering::SeqCst), 1);

    cache.invalidate();
    cache.status(backend.as_ref()).await;
    assert_eq!(backend.health_checks.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn unhealthy_report_means_offline() {
    let backend = CountingBackend {
        health_checks: AtomicUsize::new(0),
        healthy: false,
    };
    let cache = HealthCache::new(Duration::from_secs(300));
    assert_eq!(cache.status(&backend).await, ConnectionStatus::Offline);
}

#[tokio::test]
async fn failed_health_check_means_offline() {
    let cache = HealthCache::new(Duration::ZERO);
    assert_eq!(
        cache.status(&unreachable_backend()).await,
        ConnectionStatus::Offline
    );
}
