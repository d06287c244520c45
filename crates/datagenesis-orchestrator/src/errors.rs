use thiserror::Error;

use datagenesis_generate::GenerationError;
use datagenesis_request::ValidationReport;

use crate::progress::RequestId;
use crate::state::GenerationState;

/// Errors surfaced to orchestrator callers.
///
/// Remote failures never appear here; they are logged and trigger fallback.
#[derive(Debug, Error)]
pub enum OrchestratorError {
    #[error("invalid request: {}", .0.summary())]
    Validation(ValidationReport),
    #[error("local generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("request {request_id} was superseded by a newer request")]
    Superseded { request_id: RequestId },
    #[error("invalid state transition from {from} to {to}")]
    InvalidTransition {
        from: GenerationState,
        to: GenerationState,
    },
}
