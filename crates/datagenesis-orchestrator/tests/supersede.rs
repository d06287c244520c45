mod support;

use std::sync::Arc;

use datagenesis_orchestrator::{GenerationState, OrchestratorError};

use support::{GatedBackend, generation_request, orchestrator, uncapped_orchestrator};

#[tokio::test]
async fn late_result_of_superseded_request_is_discarded() {
    let backend = Arc::new(GatedBackend::default());
    let orch = Arc::new(orchestrator(backend.clone()));

    let first = tokio::spawn({
        let orch = orch.clone();
        async move { orch.generate(&generation_request("generic", Some(2))).await }
    });
    backend.entered.notified().await;
    let stale_id = orch.current_request().expect("first request started");

    let second = orch
        .generate(&generation_request("generic", Some(5)))
        .await
        .expect("second request");
    assert_eq!(second.get().rows_generated(), 5);

    backend.release.notify_one();
    let first = first.await.expect("join");
    match first {
        Err(OrchestratorError::Superseded { request_id }) => assert_eq!(request_id, stale_id),
        other => panic!("expected superseded, got {other:?}"),
    }

    let current = orch.current_result().expect("result");
    assert_eq!(current.rows_generated(), 5);
    assert_eq!(current.request_id(), second.get().request_id());
    assert_eq!(orch.state(), GenerationState::SucceededRemote);
}

#[tokio::test]
async fn progress_subscription_ends_when_request_is_superseded() {
    let backend = Arc::new(GatedBackend::default());
    let orch = Arc::new(orchestrator(backend.clone()));

    let first = tokio::spawn({
        let orch = orch.clone();
        async move { orch.generate(&generation_request("generic", Some(2))).await }
    });
    backend.entered.notified().await;
    let stale_id = orch.current_request().expect("first request started");
    let mut stale = orch.progress().subscribe(stale_id);

    orch.generate(&generation_request("generic", Some(5)))
        .await
        .expect("second request");
    assert!(stale.next().await.is_none());

    backend.release.notify_one();
    let _ = first.await.expect("join");
    assert!(stale.next().await.is_none());
}

#[tokio::test]
async fn progress_subscription_sees_completion() {
    let backend = Arc::new(GatedBackend::default());
    let orch = Arc::new(orchestrator(backend.clone()));

    let task = tokio::spawn({
        let orch = orch.clone();
        async move { orch.generate(&generation_request("generic", Some(2))).await }
    });
    backend.entered.notified().await;
    let id = orch.current_request().expect("request started");
    let mut progress = orch.progress().subscribe(id);

    backend.release.notify_one();
    let event = progress.next().await.expect("completion event");
    assert_eq!(event.progress, 100);
    assert!(event.is_success());
    assert!(progress.next().await.is_none());

    let outcome = task.await.expect("join").expect("generate");
    assert_eq!(outcome.get().rows_generated(), 2);
}

#[tokio::test]
async fn superseded_request_whose_fallback_fails_reports_superseded() {
    let backend = Arc::new(GatedBackend::failing_first());
    let orch = Arc::new(uncapped_orchestrator(backend.clone()));

    let first = tokio::spawn({
        let orch = orch.clone();
        async move {
            orch.generate(&generation_request("generic", Some(u64::MAX)))
                .await
        }
    });
    backend.entered.notified().await;
    let stale_id = orch.current_request().expect("first request started");

    orch.generate(&generation_request("generic", Some(5)))
        .await
        .expect("second request");

    backend.release.notify_one();
    match first.await.expect("join") {
        Err(OrchestratorError::Superseded { request_id }) => assert_eq!(request_id, stale_id),
        other => panic!("expected superseded, got {other:?}"),
    }
    assert_eq!(orch.state(), GenerationState::SucceededRemote);
    assert_eq!(orch.current_result().expect("result").rows_generated(), 5);
}
