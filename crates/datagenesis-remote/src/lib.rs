//! Client side of the remote generation backend.
//!
//! The backend owns its routes and AI providers; this crate only knows the
//! request/response contract and treats every failure as "unavailable".

pub mod backend;
pub mod decode;
pub mod errors;
pub mod health;
pub mod http;
pub mod model;
pub mod progress;

pub use backend::{Backend, OfflineBackend};
pub use errors::{RemoteError, Result};
pub use health::HealthCache;
pub use http::{HttpBackend, HttpBackendConfig};
pub use model::{ConnectionStatus, GenerateResponse, HealthReport, SchemaResponse, ServiceStatus};
pub use progress::ProgressEvent;
