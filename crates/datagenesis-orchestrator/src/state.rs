use std::fmt;

use serde::Serialize;

/// Lifecycle of one generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GenerationState {
    #[default]
    Idle,
    RequestingRemote,
    SucceededRemote,
    FallingBack,
    SucceededFallback,
    Failed,
}

impl GenerationState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GenerationState::SucceededRemote
                | GenerationState::SucceededFallback
                | GenerationState::Failed
        )
    }

    /// Whether `next` may follow `self`.
    ///
    /// A new request may start from idle or any terminal state, and also
    /// from an in-flight state when it supersedes an older request.
    pub fn can_transition_to(&self, next: GenerationState) -> bool {
        use GenerationState::*;
        match (self, next) {
            (_, RequestingRemote) => true,
            (RequestingRemote, SucceededRemote | FallingBack) => true,
            (FallingBack, SucceededFallback | Failed) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationState::Idle => "idle",
            GenerationState::RequestingRemote => "requesting_remote",
            GenerationState::SucceededRemote => "succeeded_remote",
            GenerationState::FallingBack => "falling_back",
            GenerationState::SucceededFallback => "succeeded_fallback",
            GenerationState::Failed => "failed",
        }
    }
}

impl fmt::Display for GenerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
