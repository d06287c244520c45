use thiserror::Error;

/// Any way the remote backend can be unavailable.
#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("backend request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("backend returned status {0}")]
    Status(u16),
    #[error("malformed backend response: {0}")]
    Malformed(String),
    #[error("backend is disabled")]
    Offline,
}

/// Result type for remote backend calls.
pub type Result<T> = std::result::Result<T, RemoteError>;
