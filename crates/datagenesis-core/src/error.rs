use thiserror::Error;

/// Core error type shared across DataGenesis crates.
#[derive(Debug, Error)]
pub enum Error {
    /// Uploaded data could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),
    /// A request is missing required input.
    #[error("validation error: {0}")]
    Validation(String),
    /// The schema violates internal invariants.
    #[error("invalid schema: {0}")]
    InvalidSchema(String),
    /// Catch-all error for unexpected failures.
    #[error("other error: {0}")]
    Other(String),
}

/// Convenience alias for results returned by DataGenesis crates.
pub type Result<T> = std::result::Result<T, Error>;
