use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use serde_json::{Value, json};
use tracing::{info, warn};
use uuid::Uuid;

use datagenesis_core::Schema;
use datagenesis_generate::{ExportArtifact, ExportFormat};
use datagenesis_introspect::{InferOptions, introspect_file};
use datagenesis_orchestrator::{Orchestrator, OrchestratorOptions};
use datagenesis_remote::{Backend, ConnectionStatus, HttpBackend, OfflineBackend};
use datagenesis_request::{GenerationRequest, SchemaRequest, parse_generation_request};

use crate::config::Settings;
use crate::{CliError, GenerateArgs, InferArgs, SchemaArgs};

fn backend(settings: &Settings, offline: bool) -> Result<Arc<dyn Backend>, CliError> {
    if offline || !settings.backend.enabled {
        info!(event = "backend_disabled");
        return Ok(Arc::new(OfflineBackend));
    }
    let backend = HttpBackend::new(settings.backend.http_config())?;
    info!(event = "backend_configured", base_url = backend.base_url());
    Ok(Arc::new(backend))
}

fn orchestrator(settings: &Settings, backend: Arc<dyn Backend>) -> Orchestrator {
    Orchestrator::new(
        backend,
        OrchestratorOptions {
            seed: settings.generation.seed,
            max_row_count: settings.generation.max_row_count,
            health_ttl: settings.backend.health_ttl(),
            ..Default::default()
        },
    )
}

fn infer_options(settings: &Settings) -> InferOptions {
    InferOptions {
        max_upload_bytes: settings.generation.max_upload_bytes,
        ..Default::default()
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub(crate) async fn run_health(settings: &Settings) -> Result<(), CliError> {
    let backend = backend(settings, false)?;
    let summary = match backend.health().await {
        Ok(report) => {
            let status = if report.healthy {
                ConnectionStatus::Online
            } else {
                ConnectionStatus::Offline
            };
            json!({
                "status": status.to_string(),
                "healthy": report.healthy,
                "services": report.services,
            })
        }
        Err(err) => {
            warn!(event = "health_check_failed", error = %err);
            json!({
                "status": ConnectionStatus::Offline.to_string(),
                "healthy": false,
                "error": err.to_string(),
            })
        }
    };
    print_json(&summary)
}

pub(crate) async fn run_infer(settings: &Settings, args: InferArgs) -> Result<(), CliError> {
    let upload = introspect_file(&args.file, &infer_options(settings)).await?;
    info!(
        event = "schema_inferred",
        path = %args.file.display(),
        fields = upload.schema.len(),
        rows = upload.rows.len()
    );
    print_json(&json!({
        "format": upload.format.as_str(),
        "rows": upload.rows.len(),
        "schema": upload.schema,
    }))
}

pub(crate) async fn run_schema(settings: &Settings, args: SchemaArgs) -> Result<(), CliError> {
    let orchestrator = orchestrator(settings, backend(settings, args.offline)?);
    let request = SchemaRequest {
        description: args.description,
        domain: args.domain,
        data_type: args.data_type,
    };

    let outcome = orchestrator.request_schema(&request).await?;
    let method = outcome.method();
    let proposal = outcome.into_inner();
    info!(
        event = "schema_proposed",
        method = %method,
        domain = %proposal.detected_domain,
        fields = proposal.schema.len()
    );
    print_json(&json!({
        "method": method,
        "detectedDomain": proposal.detected_domain,
        "schema": proposal.schema,
        "sampleData": proposal.sample_data,
    }))
}

pub(crate) async fn run_generate(settings: &Settings, args: GenerateArgs) -> Result<(), CliError> {
    let run_id = Uuid::new_v4().to_string();
    let timer = Instant::now();
    info!(event = "run_started", run_id = %run_id);

    let request = build_request(settings, &args).await?;
    let format = ExportFormat::from_tag(&args.format);
    let out_dir = args
        .out_dir
        .clone()
        .unwrap_or_else(|| settings.generation.out_dir.clone());

    let orchestrator = orchestrator(settings, backend(settings, args.offline)?);
    let mut progress = orchestrator.progress().subscribe_all();
    let progress_log = tokio::spawn(async move {
        while let Ok((request_id, event)) = progress.recv().await {
            info!(
                event = "progress",
                request_id = %request_id,
                progress = event.progress,
                step = event.step.as_deref().unwrap_or_default(),
                message = event.message.as_deref().unwrap_or_default()
            );
        }
    });

    let outcome = orchestrator.generate(&request).await;
    drop(orchestrator);
    if let Err(err) = progress_log.await {
        warn!(event = "progress_log_failed", error = %err);
    }
    let outcome = outcome?;

    let result = outcome.get();
    let artifact = ExportArtifact::build(result.dataset(), format, result.generated_at())?;
    let path = artifact.write_to(&out_dir)?;

    let scores = result.scores();
    info!(
        event = "run_finished",
        run_id = %run_id,
        method = %result.generation_method(),
        rows = result.rows_generated(),
        duration_ms = timer.elapsed().as_millis() as u64
    );
    print_json(&json!({
        "generationMethod": result.generation_method(),
        "rowsGenerated": result.rows_generated(),
        "columnsGenerated": result.columns_generated(),
        "qualityScore": scores.quality,
        "privacyScore": scores.privacy,
        "biasScore": scores.bias,
        "file": path.display().to_string(),
        "contentType": artifact.content_type,
    }))
}

/// Assemble the request from the optional request file, uploads and flags.
async fn build_request(
    settings: &Settings,
    args: &GenerateArgs,
) -> Result<GenerationRequest, CliError> {
    let mut request = match &args.request {
        Some(path) => {
            let value: Value = serde_json::from_str(&tokio::fs::read_to_string(path).await?)?;
            let validated = parse_generation_request(&value, settings.generation.max_row_count)
                .map_err(CliError::Validation)?;
            for warning in &validated.warnings {
                warn!(event = "request_warning", code = %warning.code, "{}", warning.message);
            }
            validated.request
        }
        None => GenerationRequest {
            domain: "generic".to_string(),
            data_type: "tabular".to_string(),
            ..Default::default()
        },
    };

    if let Some(domain) = &args.domain {
        request.domain = domain.clone();
    }
    if let Some(data_type) = &args.data_type {
        request.data_type = data_type.clone();
    }
    if let Some(description) = &args.description {
        request.description = Some(description.clone());
    }
    if let Some(rows) = args.rows {
        request.row_count = Some(rows);
    }

    if let Some(path) = &args.schema {
        request.schema = read_schema(path).await?;
    }
    if let Some(path) = &args.input {
        let upload = introspect_file(path, &infer_options(settings)).await?;
        info!(
            event = "upload_read",
            path = %path.display(),
            rows = upload.rows.len(),
            fields = upload.schema.len()
        );
        if request.schema.is_empty() {
            request.schema = upload.schema;
        }
        request.source_data = upload.rows;
    }

    if request.row_count.is_none() {
        request.row_count = Some(settings.generation.default_row_count);
    }
    Ok(request)
}

async fn read_schema(path: &Path) -> Result<Schema, CliError> {
    let content = tokio::fs::read_to_string(path).await?;
    Ok(serde_json::from_str(&content)?)
}
