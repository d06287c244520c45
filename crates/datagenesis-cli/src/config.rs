use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use datagenesis_remote::HttpBackendConfig;
use datagenesis_request::{DEFAULT_ROW_COUNT, MAX_ROW_COUNT};

pub const DEFAULT_CONFIG_FILE: &str = "datagenesis.toml";
pub const BACKEND_URL_ENV: &str = "DATAGENESIS_BACKEND_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("toml decode error: {0}")]
    TomlDecode(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub backend: BackendSettings,
    pub generation: GenerationSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub base_url: String,
    /// When false every request goes straight to local fallback.
    pub enabled: bool,
    pub timeout_secs: u64,
    pub health_ttl_secs: u64,
    pub health_path: String,
    pub schema_path: String,
    pub generate_path: String,
}

impl Default for BackendSettings {
    fn default() -> Self {
        let http = HttpBackendConfig::default();
        Self {
            base_url: http.base_url,
            enabled: true,
            timeout_secs: http.timeout.as_secs(),
            health_ttl_secs: 300,
            health_path: http.health_path,
            schema_path: http.schema_path,
            generate_path: http.generate_path,
        }
    }
}

impl BackendSettings {
    pub fn http_config(&self) -> HttpBackendConfig {
        HttpBackendConfig {
            base_url: self.base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            health_path: self.health_path.clone(),
            schema_path: self.schema_path.clone(),
            generate_path: self.generate_path.clone(),
        }
    }

    pub fn health_ttl(&self) -> Duration {
        Duration::from_secs(self.health_ttl_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    pub default_row_count: u64,
    /// Requests above this are rejected before any generation starts.
    pub max_row_count: u64,
    pub max_upload_bytes: u64,
    pub out_dir: PathBuf,
    pub seed: Option<u64>,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            default_row_count: DEFAULT_ROW_COUNT,
            max_row_count: MAX_ROW_COUNT,
            max_upload_bytes: 100 * 1024 * 1024,
            out_dir: PathBuf::from("."),
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub format: LogFormat,
    pub filter: String,
    /// Optional JSON-lines log file, appended to.
    pub file: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            filter: "info".to_string(),
            file: None,
        }
    }
}

/// Load settings from `explicit`, or from `datagenesis.toml` when present.
///
/// A missing default file yields built-in defaults; a missing explicit file
/// is an error. The backend URL environment variable wins over both.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings, ConfigError> {
    let mut settings = match explicit {
        Some(path) => read_settings(path)?,
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE);
            if path.exists() {
                read_settings(path)?
            } else {
                Settings::default()
            }
        }
    };
    settings.apply_backend_url(std::env::var(BACKEND_URL_ENV).ok());
    settings.validate()?;
    Ok(settings)
}

pub fn parse_settings(content: &str) -> Result<Settings, ConfigError> {
    Ok(toml::from_str(content)?)
}

fn read_settings(path: &Path) -> Result<Settings, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_settings(&content)
}

impl Settings {
    pub fn apply_backend_url(&mut self, url: Option<String>) {
        if let Some(url) = url.map(|value| value.trim().to_string()) {
            if !url.is_empty() {
                self.backend.base_url = url;
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.enabled && self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "backend.base_url is empty while the backend is enabled".to_string(),
            ));
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "backend.timeout_secs must be positive".to_string(),
            ));
        }
        if self.generation.default_row_count > self.generation.max_row_count {
            return Err(ConfigError::Invalid(format!(
                "generation.default_row_count {} exceeds generation.max_row_count {}",
                self.generation.default_row_count, self.generation.max_row_count
            )));
        }
        if self.generation.max_upload_bytes == 0 {
            return Err(ConfigError::Invalid(
                "generation.max_upload_bytes must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
