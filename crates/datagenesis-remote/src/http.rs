use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use datagenesis_request::{GenerationRequest, SchemaRequest};

use crate::backend::Backend;
use crate::decode::decode_body;
use crate::errors::{RemoteError, Result};
use crate::model::{GenerateResponse, HealthReport, SchemaResponse};

/// Connection settings for [`HttpBackend`].
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    pub timeout: Duration,
    pub health_path: String,
    pub schema_path: String,
    pub generate_path: String,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            timeout: Duration::from_secs(30),
            health_path: "/api/health".to_string(),
            schema_path: "/api/generation/schema-from-description".to_string(),
            generate_path: "/api/generation/generate-local".to_string(),
        }
    }
}

/// Backend reached over HTTP with JSON bodies.
pub struct HttpBackend {
    config: HttpBackendConfig,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self { config, client })
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "GET");
        let response = self.client.get(url).send().await?;
        read_body(response).await
    }

    async fn post_json<B: Serialize + Sync, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(url = %url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        read_body(response).await
    }
}

async fn read_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(RemoteError::Status(status.as_u16()));
    }
    let text = response.text().await?;
    decode_body(&text)
}

#[async_trait]
impl Backend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    async fn health(&self) -> Result<HealthReport> {
        self.get_json(&self.config.health_path).await
    }

    async fn schema_from_description(&self, request: &SchemaRequest) -> Result<SchemaResponse> {
        self.post_json(&self.config.schema_path, request).await
    }

    async fn generate(&self, request: &GenerationRequest) -> Result<GenerateResponse> {
        self.post_json(&self.config.generate_path, request).await
    }
}
