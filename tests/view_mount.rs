//! Mounting containers: requests on mount, render from state, abort on unmount.

mod common;

use clowder_client::state::Action;
use clowder_client::views::{self, Container, FileView, ProfileView, ProfileViewModel, ViewContext};
use common::{config_for, dispatcher_for, MockBackend, MockResponse};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_file_view_fetches_everything_and_renders() {
    let backend = MockBackend::start().await;
    // Mount requests run concurrently, so responses are not matched to paths.
    for _ in 0..4 {
        backend.enqueue_response(MockResponse::json("[]")).await;
    }

    let dispatcher = dispatcher_for(&backend);
    let guard = views::mount::<FileView>(dispatcher.clone(), &"f1".to_string());
    let events = guard.settle().await;
    assert_eq!(events.len(), 4);

    let mut paths: Vec<String> = backend
        .captured_requests()
        .await
        .into_iter()
        .map(|r| r.path)
        .collect();
    paths.sort();
    assert_eq!(
        paths,
        vec![
            "/api/v2/files/f1/summary",
            "/files/f1/extracted_metadata",
            "/files/f1/getPreviews",
            "/files/f1/metadata.jsonld",
        ]
    );

    assert!(events
        .iter()
        .any(|e| matches!(e.action, Action::ReceivePreviews { .. })));
    let ctx = ViewContext::from_config(&config_for(&backend.base_url(), Some("test-key")));
    let view = FileView::render(&dispatcher.store().state(), &"f1".to_string(), &ctx);
    assert!(view.metadata_jsonld.is_empty());
    assert!(view.previewers.is_empty());
}

#[tokio::test]
async fn test_profile_view_renders_loaded_profile() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(MockResponse::json(
            r#"{"email": "grace@example.org", "first_name": "Grace", "last_name": "Hopper"}"#,
        ))
        .await;

    let dispatcher = dispatcher_for(&backend);
    let ctx = ViewContext::from_config(&config_for(&backend.base_url(), None));
    assert!(matches!(
        ProfileView::render(&dispatcher.store().state(), &(), &ctx),
        ProfileViewModel::Empty { .. }
    ));

    let guard = views::mount::<ProfileView>(dispatcher.clone(), &());
    guard.settle().await;

    match ProfileView::render(&dispatcher.store().state(), &(), &ctx) {
        ProfileViewModel::Loaded { name, email, .. } => {
            assert_eq!(name, "Grace Hopper");
            assert_eq!(email, "grace@example.org");
        }
        other => panic!("expected loaded profile, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unmount_aborts_in_flight_requests() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(
            MockResponse::json(r#"{"email": "late@example.org"}"#).with_delay(300),
        )
        .await;

    let dispatcher = dispatcher_for(&backend);
    let mut events = dispatcher.store().subscribe_events();

    let guard = views::mount::<ProfileView>(dispatcher.clone(), &());
    tokio::time::sleep(Duration::from_millis(50)).await;
    drop(guard);

    tokio::time::sleep(Duration::from_millis(400)).await;
    assert!(events.try_recv().is_err(), "nothing dispatched after unmount");
    assert!(dispatcher.store().state().user.profile.is_none());
}

#[tokio::test]
async fn test_unmount_after_abandoned_settle_still_aborts() {
    let backend = MockBackend::start().await;
    backend
        .enqueue_response(
            MockResponse::json(r#"{"email": "late@example.org"}"#).with_delay(300),
        )
        .await;

    let dispatcher = dispatcher_for(&backend);
    let mut events = dispatcher.store().subscribe_events();

    let guard = views::mount::<ProfileView>(dispatcher.clone(), &());
    let settled = tokio::time::timeout(Duration::from_millis(50), guard.settle()).await;
    assert!(settled.is_err(), "response is still delayed");
    drop(guard);

    tokio::time::sleep(Duration::from_millis(500)).await;
    assert!(events.try_recv().is_err(), "nothing dispatched after unmount");
    assert!(dispatcher.store().state().user.profile.is_none());
}

#[tokio::test]
async fn test_unmount_runs_cleanups_in_reverse_order() {
    let backend = MockBackend::start().await;
    let dispatcher = dispatcher_for(&backend);
    let order = Arc::new(Mutex::new(Vec::new()));

    let mut guard = views::MountGuard::mount(dispatcher, Vec::new());
    for step in ["first", "second"] {
        let order = order.clone();
        guard.on_unmount(move || order.lock().push(step));
    }
    assert!(order.lock().is_empty());

    drop(guard);
    assert_eq!(*order.lock(), vec!["second", "first"]);
}

#[tokio::test]
async fn test_reselect_switches_file() {
    let backend = MockBackend::start().await;
    for _ in 0..8 {
        backend.enqueue_response(MockResponse::json("[]")).await;
    }

    let dispatcher = dispatcher_for(&backend);
    let guard = views::mount::<FileView>(dispatcher, &"f1".to_string());
    guard.settle().await;
    FileView::reselect(&guard, "f2");
    let events = guard.settle().await;
    assert_eq!(events.len(), 4);

    let requests = backend.captured_requests().await;
    assert_eq!(requests.len(), 8);
    assert!(requests[4..].iter().all(|r| r.path.contains("/f2/")));
    assert!(events
        .iter()
        .any(|e| matches!(e.action, Action::ReceivePreviews { .. })));
}
