use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tracing::{debug, info, warn};

use datagenesis_core::{Dataset, Domain, GenerationMethod, Schema};
use datagenesis_generate::{GenerationError, RowSynthesizer, SynthesizeOptions, canned_schema};
use datagenesis_introspect::infer_schema;
use datagenesis_remote::{Backend, ConnectionStatus, HealthCache, ProgressEvent};
use datagenesis_request::{
    GenerationRequest, MAX_ROW_COUNT, SchemaRequest, validate_generation_request,
    validate_schema_request,
};

use crate::errors::OrchestratorError;
use crate::outcome::{GenerationResult, Outcome, SchemaProposal, Scores};
use crate::progress::{DEFAULT_CAPACITY, ProgressHub, RequestId};
use crate::state::GenerationState;

/// Default lifetime of a cached health check.
pub const DEFAULT_HEALTH_TTL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone)]
pub struct OrchestratorOptions {
    /// Seed for fallback generation; random per call when unset.
    pub seed: Option<u64>,
    /// Requests for more rows are rejected as invalid.
    pub max_row_count: u64,
    pub health_ttl: Duration,
    pub progress_capacity: usize,
}

impl Default for OrchestratorOptions {
    fn default() -> Self {
        Self {
            seed: None,
            max_row_count: MAX_ROW_COUNT,
            health_ttl: DEFAULT_HEALTH_TTL,
            progress_capacity: DEFAULT_CAPACITY,
        }
    }
}

#[derive(Debug, Default)]
struct Session {
    last_id: u64,
    current: Option<RequestId>,
    state: GenerationState,
    result: Option<Arc<GenerationResult>>,
}

/// Drives schema and dataset requests against a backend with local fallback.
///
/// One orchestrator is one session: a newer `generate` call supersedes any
/// call still in flight, and only the newest request may publish its result.
pub struct Orchestrator {
    backend: Arc<dyn Backend>,
    health: HealthCache,
    progress: ProgressHub,
    options: OrchestratorOptions,
    session: Mutex<Session>,
}

impl Orchestrator {
    pub fn new(backend: Arc<dyn Backend>, options: OrchestratorOptions) -> Self {
        Self {
            health: HealthCache::new(options.health_ttl),
            progress: ProgressHub::new(options.progress_capacity),
            backend,
            options,
            session: Mutex::new(Session::default()),
        }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn progress(&self) -> &ProgressHub {
        &self.progress
    }

    pub fn state(&self) -> GenerationState {
        self.session().state
    }

    /// Result of the newest completed request, if any.
    pub fn current_result(&self) -> Option<Arc<GenerationResult>> {
        self.session().result.clone()
    }

    /// Request id of the newest generation, if one was started.
    pub fn current_request(&self) -> Option<RequestId> {
        self.session().current
    }

    /// Backend reachability, cached for the configured TTL.
    pub async fn connection_status(&self) -> ConnectionStatus {
        self.health.status(self.backend.as_ref()).await
    }

    /// Propose a schema for a description, falling back to a canned schema.
    pub async fn request_schema(
        &self,
        request: &SchemaRequest,
    ) -> Result<Outcome<SchemaProposal>, OrchestratorError> {
        let report = validate_schema_request(request);
        if !report.is_ok() {
            return Err(OrchestratorError::Validation(report));
        }

        let domain = request.domain();
        let remote = self
            .backend
            .schema_from_description(request)
            .await
            .and_then(|response| response.ensure_usable());

        match remote {
            Ok(response) => {
                let detected_domain = response
                    .detected_domain
                    .as_deref()
                    .map(Domain::from_tag)
                    .unwrap_or(domain);
                info!(
                    backend = self.backend.name(),
                    fields = response.schema.len(),
                    "schema proposed by backend"
                );
                Ok(Outcome::Remote(SchemaProposal {
                    schema: response.schema,
                    sample_data: response.sample_data,
                    detected_domain,
                }))
            }
            Err(err) => {
                warn!(
                    backend = self.backend.name(),
                    error = %err,
                    domain = domain.as_str(),
                    "backend schema request failed, using canned schema"
                );
                let fallback = self.synthesizer().fallback_schema(domain)?;
                Ok(Outcome::Fallback(SchemaProposal {
                    schema: fallback.schema,
                    sample_data: fallback.sample_data,
                    detected_domain: fallback.detected_domain,
                }))
            }
        }
    }

    /// Generate a dataset, falling back to local placeholder rows.
    ///
    /// Returns [`OrchestratorError::Superseded`] when a newer call started
    /// before this one finished; its result is discarded.
    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<Outcome<GenerationResult>, OrchestratorError> {
        let report = validate_generation_request(request, self.options.max_row_count);
        if !report.is_ok() {
            return Err(OrchestratorError::Validation(report));
        }
        for warning in &report.warnings {
            debug!(code = %warning.code, path = %warning.path, "{}", warning.message);
        }

        let id = self.begin();
        info!(
            request_id = %id,
            domain = %request.domain,
            rows = request.effective_row_count(),
            "generation started"
        );
        self.progress.publish(
            id,
            ProgressEvent::new(10, "requesting_remote").with_message("Contacting backend"),
        );

        let remote = self
            .backend
            .generate(request)
            .await
            .and_then(|response| response.ensure_usable());

        let outcome = match remote {
            Ok(response) => {
                let scores = Scores::from_response(&response);
                let dataset = Dataset::new(response.data);
                Outcome::Remote(GenerationResult::new(
                    id,
                    dataset,
                    request.schema.len(),
                    GenerationMethod::BackendLocal,
                    scores,
                ))
            }
            Err(err) => {
                warn!(
                    request_id = %id,
                    backend = self.backend.name(),
                    error = %err,
                    "backend generation failed, falling back to local synthesis"
                );
                self.advance(id, GenerationState::FallingBack)?;
                self.progress.publish(
                    id,
                    ProgressEvent::new(50, "local_fallback")
                        .with_message("Backend unavailable, generating locally"),
                );
                match self.fallback(id, request) {
                    Ok(result) => Outcome::Fallback(result),
                    Err(err) => {
                        if !self.is_current(id) {
                            debug!(request_id = %id, error = %err, "superseded request failed locally");
                            return Err(OrchestratorError::Superseded { request_id: id });
                        }
                        warn!(request_id = %id, error = %err, "local generation failed");
                        self.advance(id, GenerationState::Failed)?;
                        self.progress
                            .publish(id, ProgressEvent::failed(err.to_string()));
                        return Err(err.into());
                    }
                }
            }
        };

        self.commit(id, outcome)
    }

    fn session(&self) -> MutexGuard<'_, Session> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn synthesizer(&self) -> RowSynthesizer {
        RowSynthesizer::new(&SynthesizeOptions {
            seed: self.options.seed,
        })
    }

    fn is_current(&self, id: RequestId) -> bool {
        self.session().current == Some(id)
    }

    fn begin(&self) -> RequestId {
        let id = {
            let mut session = self.session();
            session.last_id += 1;
            let id = RequestId::new(session.last_id);
            if let Some(previous) = session.current {
                if !session.state.is_terminal() {
                    debug!(%previous, current = %id, "superseding in-flight request");
                }
            }
            session.current = Some(id);
            session.state = GenerationState::RequestingRemote;
            id
        };
        self.progress.begin(id);
        id
    }

    /// Move the session to `next` if `id` is still current.
    fn advance(&self, id: RequestId, next: GenerationState) -> Result<(), OrchestratorError> {
        let mut session = self.session();
        if session.current != Some(id) {
            return Ok(());
        }
        if !session.state.can_transition_to(next) {
            return Err(OrchestratorError::InvalidTransition {
                from: session.state,
                to: next,
            });
        }
        session.state = next;
        Ok(())
    }

    fn fallback(
        &self,
        id: RequestId,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, GenerationError> {
        let schema = fallback_schema_for(request);
        let rows = usize::try_from(request.effective_row_count()).map_err(|_| {
            datagenesis_core::Error::Other(format!(
                "row count {} exceeds addressable size",
                request.effective_row_count()
            ))
        })?;
        let dataset = self.synthesizer().synthesize(&schema, rows)?;
        Ok(GenerationResult::new(
            id,
            dataset,
            schema.len(),
            GenerationMethod::LocalFallback,
            Scores::FALLBACK,
        ))
    }

    fn commit(
        &self,
        id: RequestId,
        outcome: Outcome<GenerationResult>,
    ) -> Result<Outcome<GenerationResult>, OrchestratorError> {
        let terminal = if outcome.is_fallback() {
            GenerationState::SucceededFallback
        } else {
            GenerationState::SucceededRemote
        };
        {
            let mut session = self.session();
            if session.current != Some(id) {
                debug!(request_id = %id, "discarding result of superseded request");
                return Err(OrchestratorError::Superseded { request_id: id });
            }
            if !session.state.can_transition_to(terminal) {
                return Err(OrchestratorError::InvalidTransition {
                    from: session.state,
                    to: terminal,
                });
            }
            session.state = terminal;
            session.result = Some(Arc::new(outcome.get().clone()));
        }

        let result = outcome.get();
        info!(
            request_id = %id,
            method = %result.generation_method(),
            rows = result.rows_generated(),
            columns = result.columns_generated(),
            "generation finished"
        );
        self.progress.publish(
            id,
            ProgressEvent::new(100, terminal.as_str()).with_message("Generation complete"),
        );
        Ok(outcome)
    }
}

/// Schema used for local synthesis: the request's own schema, else one
/// inferred from the uploaded rows, else the canned schema for the domain.
pub fn fallback_schema_for(request: &GenerationRequest) -> Schema {
    if !request.schema.is_empty() {
        return request.schema.clone();
    }
    if let Some(first) = request.source_data.first() {
        let columns: Vec<String> = first.keys().cloned().collect();
        let inferred = infer_schema(&columns, &request.source_data);
        if !inferred.is_empty() {
            return inferred;
        }
    }
    canned_schema(request.domain())
}
