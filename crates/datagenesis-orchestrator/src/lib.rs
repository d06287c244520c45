//! Generation orchestration for DataGenesis.
//!
//! Every request tries the remote backend first and falls back to the local
//! synthesizer on any failure. Both paths end in the same result shape, tagged
//! with where it came from.

pub mod errors;
pub mod orchestrator;
pub mod outcome;
pub mod progress;
pub mod state;

pub use errors::OrchestratorError;
pub use orchestrator::{Orchestrator, OrchestratorOptions};
pub use outcome::{GenerationResult, Outcome, SchemaProposal, Scores};
pub use progress::{ProgressHub, ProgressSubscription, RequestId};
pub use state::GenerationState;
