use std::fmt;

use serde::Serialize;
use tokio::sync::{broadcast, watch};
use tracing::{debug, warn};

use datagenesis_remote::ProgressEvent;

/// Default number of buffered events per subscriber.
pub const DEFAULT_CAPACITY: usize = 64;

/// Identifies one generation request within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RequestId(u64);

impl RequestId {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "req-{}", self.0)
    }
}

/// Fan-out of progress events keyed by request id.
///
/// Only the current request may publish. Starting a new request ends every
/// subscription bound to an older one.
#[derive(Debug)]
pub struct ProgressHub {
    events: broadcast::Sender<(RequestId, ProgressEvent)>,
    current: watch::Sender<Option<RequestId>>,
}

impl ProgressHub {
    pub fn new(capacity: usize) -> Self {
        let (events, _) = broadcast::channel(capacity.max(1));
        let (current, _) = watch::channel(None);
        Self { events, current }
    }

    /// Make `id` the current request, superseding any earlier one.
    pub fn begin(&self, id: RequestId) {
        let previous = self.current.send_replace(Some(id));
        if let Some(previous) = previous {
            debug!(%previous, current = %id, "progress channel switched");
        }
    }

    /// Stop routing events; open subscriptions finish.
    pub fn cancel(&self) {
        self.current.send_replace(None);
    }

    pub fn current(&self) -> Option<RequestId> {
        *self.current.borrow()
    }

    /// Deliver an event for `id`. Returns false if `id` is no longer current
    /// or nobody is listening.
    pub fn publish(&self, id: RequestId, event: ProgressEvent) -> bool {
        if self.current() != Some(id) {
            debug!(request_id = %id, progress = event.progress, "dropping stale progress event");
            return false;
        }
        self.events.send((id, event)).is_ok()
    }

    pub fn subscribe(&self, id: RequestId) -> ProgressSubscription {
        ProgressSubscription {
            id,
            events: self.events.subscribe(),
            current: self.current.subscribe(),
            finished: false,
        }
    }

    /// Every event the hub delivers, for any request. Ends when the hub drops.
    pub fn subscribe_all(&self) -> broadcast::Receiver<(RequestId, ProgressEvent)> {
        self.events.subscribe()
    }
}

impl Default for ProgressHub {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

/// Stream of progress events for a single request.
#[derive(Debug)]
pub struct ProgressSubscription {
    id: RequestId,
    events: broadcast::Receiver<(RequestId, ProgressEvent)>,
    current: watch::Receiver<Option<RequestId>>,
    finished: bool,
}

impl ProgressSubscription {
    pub fn request_id(&self) -> RequestId {
        self.id
    }

    /// Next event for this request.
    ///
    /// Returns `None` after a terminal event, once the request is superseded
    /// or cancelled, or after [`ProgressSubscription::close`].
    pub async fn next(&mut self) -> Option<ProgressEvent> {
        loop {
            if self.finished {
                return None;
            }
            if *self.current.borrow() != Some(self.id) {
                self.finished = true;
                return None;
            }
            let received = tokio::select! {
                received = self.events.recv() => received,
                changed = self.current.changed() => {
                    if changed.is_err() {
                        self.finished = true;
                    }
                    continue;
                }
            };
            match received {
                Ok((id, event)) if id == self.id => {
                    if event.is_terminal() {
                        self.finished = true;
                    }
                    return Some(event);
                }
                Ok(_) => continue,
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(request_id = %self.id, skipped, "progress subscriber lagged");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    self.finished = true;
                }
            }
        }
    }

    /// Stop listening. Later calls to `next` return `None`.
    pub fn close(&mut self) {
        self.finished = true;
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
