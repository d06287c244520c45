use std::sync::Mutex;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use crate::backend::Backend;
use crate::model::ConnectionStatus;

/// Caches health check outcomes so repeated connection checks stay cheap.
#[derive(Debug)]
pub struct HealthCache {
    ttl: Duration,
    last: Mutex<Option<(Instant, ConnectionStatus)>>,
}

impl HealthCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            last: Mutex::new(None),
        }
    }

    /// Cached status if still fresh, otherwise a new check.
    pub async fn status(&self, backend: &dyn Backend) -> ConnectionStatus {
        if let Some(status) = self.cached() {
            debug!(%status, "using cached health status");
            return status;
        }

        let status = match backend.health().await {
            Ok(report) if report.healthy => ConnectionStatus::Online,
            Ok(_) => ConnectionStatus::Offline,
            Err(err) => {
                warn!(backend = backend.name(), error = %err, "health check failed");
                ConnectionStatus::Offline
            }
        };

        if let Ok(mut last) = self.last.lock() {
            *last = Some((Instant::now(), status));
        }
        status
    }

    /// Drop the cached status so the next check health_checks again.
    pub fn invalidate(&self) {
        if let Ok(mut last) = self.last.lock() {
            *last = None;
        }
    }

    fn cached(&self) -> Option<ConnectionStatus> {
        let last = self.last.lock().ok()?;
        match *last {
            Some((at, status)) if at.elapsed() < self.ttl => Some(status),
            _ => None,
        }
    }
}
