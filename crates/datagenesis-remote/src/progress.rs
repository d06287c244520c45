use serde::{Deserialize, Serialize};

/// Progress value signalling terminal failure.
pub const PROGRESS_FAILED: i32 = -1;

/// Progress value signalling terminal success.
pub const PROGRESS_DONE: i32 = 100;

/// One event on the generation progress channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// -1 for failure, otherwise 0..=100.
    pub progress: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini_used: Option<bool>,
}

impl ProgressEvent {
    pub fn new(progress: i32, step: impl Into<String>) -> Self {
        Self {
            progress: progress.clamp(PROGRESS_FAILED, PROGRESS_DONE),
            step: Some(step.into()),
            message: None,
            gemini_used: None,
        }
    }

    pub fn failed(reason: impl Into<String>) -> Self {
        Self {
            progress: PROGRESS_FAILED,
            step: Some("failed".to_string()),
            message: Some(reason.into()),
            gemini_used: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn is_failure(&self) -> bool {
        self.progress == PROGRESS_FAILED
    }

    pub fn is_success(&self) -> bool {
        self.progress == PROGRESS_DONE
    }

    pub fn is_terminal(&self) -> bool {
        self.is_failure() || self.is_success()
    }
}
