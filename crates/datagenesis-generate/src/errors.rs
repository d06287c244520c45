use thiserror::Error;

/// Errors emitted by local generation and export.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Core(#[from] datagenesis_core::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot allocate {rows} rows: {source}")]
    Allocation {
        rows: usize,
        source: std::collections::TryReserveError,
    },
}
