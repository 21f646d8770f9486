//! End-to-end submission tests against an in-process collaborator.
//!
//! Each test stands up a real axum server on an ephemeral port playing the
//! lead-storage service, so the whole pipeline — serialization, transport,
//! outcome mapping — is exercised.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::routing::post;
use axum::{Json, Router};
use tokio::sync::Mutex;

use leadlab_client::{
    GENERIC_FAILURE_MESSAGE, LeadField, LeadForm, LeadFormConfig, NotificationKind, SubmitOutcome,
};

/// Serve `app` on an ephemeral port and return its base URL.
async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A collaborator that always accepts and records what it received.
fn accepting_collaborator(
    hits: Arc<AtomicUsize>,
    received: Arc<Mutex<Option<serde_json::Value>>>,
) -> Router {
    Router::new().route(
        "/api/leads",
        post(move |Json(body): Json<serde_json::Value>| {
            let hits = Arc::clone(&hits);
            let received = Arc::clone(&received);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                *received.lock().await = Some(body);
                Json(serde_json::json!({
                    "success": true,
                    "message": "Recebido!",
                    "lead_id": "00000000-0000-4000-8000-000000000000",
                }))
            }
        }),
    )
}

async fn filled_form(base_url: &str) -> LeadForm {
    let form = LeadForm::new(LeadFormConfig::new(base_url)).unwrap();
    form.update_field(LeadField::Name, "Ana").await;
    form.update_field(LeadField::Email, "ana@x.com").await;
    form.update_field(LeadField::Message, "Oi").await;
    assert!(form.draft().await.is_complete());
    form
}

#[tokio::test]
async fn accepted_submission_clears_draft_and_carries_backend_message() {
    let hits = Arc::new(AtomicUsize::new(0));
    let received = Arc::new(Mutex::new(None));
    let base = serve(accepting_collaborator(Arc::clone(&hits), Arc::clone(&received))).await;

    let form = filled_form(&base).await;
    let outcome = form.submit().await;

    assert_eq!(
        outcome,
        SubmitOutcome::Accepted {
            message: "Recebido!".to_owned()
        }
    );

    let notification = outcome.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.text, "Recebido!");

    let draft = form.draft().await;
    assert_eq!(draft.name, "");
    assert_eq!(draft.email, "");
    assert_eq!(draft.message, "");
    assert!(!form.is_submitting());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn submission_uses_the_wire_field_names() {
    let received = Arc::new(Mutex::new(None));
    let base = serve(accepting_collaborator(
        Arc::new(AtomicUsize::new(0)),
        Arc::clone(&received),
    ))
    .await;

    filled_form(&base).await.submit().await;

    let body = received.lock().await.clone().unwrap();
    assert_eq!(body["nome"], "Ana");
    assert_eq!(body["email"], "ana@x.com");
    assert_eq!(body["mensagem"], "Oi");
}

#[tokio::test]
async fn rejection_preserves_draft_and_returns_to_idle() {
    let app = Router::new().route(
        "/api/leads",
        post(|| async { Json(serde_json::json!({ "success": false })) }),
    );
    let base = serve(app).await;

    let form = filled_form(&base).await;
    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::Rejected);
    let notification = outcome.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.text, GENERIC_FAILURE_MESSAGE);

    let draft = form.draft().await;
    assert_eq!(draft.name, "Ana");
    assert_eq!(draft.email, "ana@x.com");
    assert_eq!(draft.message, "Oi");
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn server_error_status_counts_as_rejection() {
    let app = Router::new().route(
        "/api/leads",
        post(|| async {
            (
                axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "error": "internal_error", "message": "boom" })),
            )
        }),
    );
    let base = serve(app).await;

    let form = filled_form(&base).await;
    assert_eq!(form.submit().await, SubmitOutcome::Rejected);
    assert!(form.draft().await.is_complete());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn unreachable_backend_is_a_transport_failure() {
    // Bind and immediately drop to get an address nothing listens on.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let form = filled_form(&format!("http://{addr}")).await;
    let outcome = form.submit().await;

    assert_eq!(outcome, SubmitOutcome::TransportFailed);
    assert_eq!(
        outcome.notification().unwrap().text,
        GENERIC_FAILURE_MESSAGE
    );
    assert!(form.draft().await.is_complete());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn slow_backend_times_out_as_transport_failure() {
    let app = Router::new().route(
        "/api/leads",
        post(|| async {
            // Well past the form's configured timeout.
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(serde_json::json!({ "success": true, "message": "Recebido!" }))
        }),
    );
    let base = serve(app).await;

    let mut config = LeadFormConfig::new(&base);
    config.timeout = Duration::from_millis(100);
    let form = LeadForm::new(config).unwrap();
    form.update_field(LeadField::Name, "Ana").await;
    form.update_field(LeadField::Email, "ana@x.com").await;
    form.update_field(LeadField::Message, "Oi").await;

    let outcome = form.submit().await;
    assert_eq!(outcome, SubmitOutcome::TransportFailed);
    assert_eq!(
        outcome.notification().unwrap().text,
        GENERIC_FAILURE_MESSAGE
    );
    assert!(form.draft().await.is_complete());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn malformed_acknowledgment_is_a_transport_failure() {
    let app = Router::new().route("/api/leads", post(|| async { "definitely not json" }));
    let base = serve(app).await;

    let form = filled_form(&base).await;
    assert_eq!(form.submit().await, SubmitOutcome::TransportFailed);
    assert!(form.draft().await.is_complete());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn repeated_failures_never_leave_the_form_stuck() {
    let app = Router::new().route(
        "/api/leads",
        post(|| async { Json(serde_json::json!({ "success": false })) }),
    );
    let base = serve(app).await;
    let form = filled_form(&base).await;

    for _ in 0..3 {
        assert_eq!(form.submit().await, SubmitOutcome::Rejected);
        assert!(!form.is_submitting());
    }
    assert!(form.draft().await.is_complete());
}

#[tokio::test]
async fn second_submit_while_in_flight_is_dropped() {
    let hits = Arc::new(AtomicUsize::new(0));
    let hits_handler = Arc::clone(&hits);
    let app = Router::new().route(
        "/api/leads",
        post(move || {
            let hits = Arc::clone(&hits_handler);
            async move {
                hits.fetch_add(1, Ordering::SeqCst);
                // Hold the first request open long enough for the second
                // submit to arrive while still in flight.
                tokio::time::sleep(Duration::from_millis(200)).await;
                Json(serde_json::json!({ "success": true, "message": "Recebido!" }))
            }
        }),
    );
    let base = serve(app).await;

    let form = filled_form(&base).await;
    let racer = form.clone();
    let first = tokio::spawn(async move { racer.submit().await });

    // Wait until the first request has reached the collaborator.
    while hits.load(Ordering::SeqCst) == 0 {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert!(form.is_submitting());
    let second = form.submit().await;
    assert_eq!(second, SubmitOutcome::Dropped);
    assert!(second.notification().is_none());

    assert_eq!(
        first.await.unwrap(),
        SubmitOutcome::Accepted {
            message: "Recebido!".to_owned()
        }
    );
    assert_eq!(hits.load(Ordering::SeqCst), 1);
    assert!(!form.is_submitting());
}
