//! Integration tests for the transition service, driving real
//! SurrealDB-backed repositories against an in-memory engine.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use outpass_core::models::notification::NotificationResult;
use outpass_core::models::outpass_request::{CreateOutpassRequest, OutpassStatus};
use outpass_core::models::user::CreateUser;
use outpass_core::notifier::Notifier;
use outpass_core::repository::{OutpassRequestRepository, UserRepository};
use outpass_db::repository::{SurrealOutpassRequestRepository, SurrealUserRepository};
use outpass_workflow::config::WorkflowConfig;
use outpass_workflow::error::TransitionError;
use outpass_workflow::service::{NotificationOutcome, TransitionService};
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem};
use uuid::Uuid;

type Requests = SurrealOutpassRequestRepository<Db>;
type Users = SurrealUserRepository<Db>;

/// Notifier that records every invocation and reports delivery.
#[derive(Clone, Default)]
struct RecordingNotifier {
    calls: Arc<Mutex<Vec<(String, String, Uuid, OutpassStatus)>>>,
}

impl RecordingNotifier {
    fn calls(&self) -> Vec<(String, String, Uuid, OutpassStatus)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    async fn notify_status_change(
        &self,
        recipient_email: &str,
        recipient_name: &str,
        request_id: Uuid,
        new_status: OutpassStatus,
    ) -> NotificationResult {
        self.calls.lock().unwrap().push((
            recipient_email.to_string(),
            recipient_name.to_string(),
            request_id,
            new_status,
        ));
        NotificationResult::delivered()
    }
}

/// Notifier that simulates a transport outage on every call.
#[derive(Clone, Copy)]
struct FailingNotifier;

impl Notifier for FailingNotifier {
    async fn notify_status_change(
        &self,
        _recipient_email: &str,
        _recipient_name: &str,
        _request_id: Uuid,
        _new_status: OutpassStatus,
    ) -> NotificationResult {
        NotificationResult::failed("smtp connection refused")
    }
}

/// Notifier that never answers within any sane bound.
#[derive(Clone, Copy)]
struct HangingNotifier;

impl Notifier for HangingNotifier {
    async fn notify_status_change(
        &self,
        _recipient_email: &str,
        _recipient_name: &str,
        _request_id: Uuid,
        _new_status: OutpassStatus,
    ) -> NotificationResult {
        tokio::time::sleep(Duration::from_secs(300)).await;
        NotificationResult::delivered()
    }
}

/// Spin up in-memory DB, run migrations, return repo handles.
async fn setup() -> (Requests, Users, Surreal<Db>) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    outpass_db::run_migrations(&db).await.unwrap();

    let requests = SurrealOutpassRequestRepository::new(db.clone());
    let users = SurrealUserRepository::new(db.clone());
    (requests, users, db)
}

/// Create a user with the given contact fields plus a pending request
/// they own.
async fn seed_request(
    requests: &Requests,
    users: &Users,
    name: Option<&str>,
    email: Option<&str>,
) -> (Uuid, Uuid) {
    let user = users
        .create(CreateUser {
            name: name.map(String::from),
            email: email.map(String::from),
        })
        .await
        .unwrap();
    let request = requests
        .create(CreateOutpassRequest { user_id: user.id })
        .await
        .unwrap();
    (user.id, request.id)
}

fn service<N: Notifier>(requests: Requests, users: Users, notifier: N) -> TransitionService<Requests, Users, N> {
    TransitionService::new(requests, users, notifier, WorkflowConfig::default())
}

#[tokio::test]
async fn approval_updates_store_and_notifies_owner() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) =
        seed_request(&requests, &users, Some("Alice"), Some("a@b.com")).await;

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    let outcome = svc.transition(request_id, "Approved").await.unwrap();

    assert_eq!(outcome.request.id, request_id);
    assert_eq!(outcome.request.status, OutpassStatus::Approved);
    assert!(outcome.notification.is_delivered());

    // The new status is durable.
    let stored = requests.get_by_id(request_id).await.unwrap();
    assert_eq!(stored.status, OutpassStatus::Approved);

    // The notifier saw exactly the owner's contact details and the
    // new status.
    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(
        calls[0],
        (
            "a@b.com".to_string(),
            "Alice".to_string(),
            request_id,
            OutpassStatus::Approved
        )
    );
}

#[tokio::test]
async fn rejection_notifies_with_rejected_status() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) =
        seed_request(&requests, &users, Some("Bob"), Some("bob@example.com")).await;

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    let outcome = svc.transition(request_id, "Rejected").await.unwrap();
    assert_eq!(outcome.request.status, OutpassStatus::Rejected);

    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].3, OutpassStatus::Rejected);
}

#[tokio::test]
async fn unknown_status_is_rejected_without_store_access() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) =
        seed_request(&requests, &users, Some("Alice"), Some("a@b.com")).await;

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    let err = svc.transition(request_id, "Escalated").await.unwrap_err();
    assert!(
        matches!(err, TransitionError::InvalidStatus { ref given } if given == "Escalated"),
        "expected InvalidStatus, got: {err:?}"
    );

    // The store is untouched and nobody was notified.
    let stored = requests.get_by_id(request_id).await.unwrap();
    assert_eq!(stored.status, OutpassStatus::Pending);
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn missing_request_is_not_found() {
    let (requests, users, _db) = setup().await;

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    let unknown = Uuid::new_v4();
    let err = svc.transition(unknown, "Approved").await.unwrap_err();
    assert!(
        matches!(err, TransitionError::RequestNotFound { id } if id == unknown),
        "expected RequestNotFound, got: {err:?}"
    );

    // No record was created and nobody was notified.
    assert!(requests.get_by_id(unknown).await.is_err());
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn notifier_outage_does_not_fail_the_transition() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) =
        seed_request(&requests, &users, Some("Alice"), Some("a@b.com")).await;

    let svc = service(requests.clone(), users, FailingNotifier);

    let outcome = svc.transition(request_id, "Approved").await.unwrap();

    // The commit stands even though delivery failed.
    let stored = requests.get_by_id(request_id).await.unwrap();
    assert_eq!(stored.status, OutpassStatus::Approved);

    match outcome.notification {
        NotificationOutcome::Failed { ref error } => {
            assert!(error.contains("smtp"), "unexpected diagnostic: {error}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn missing_contact_details_skip_notification() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) = seed_request(&requests, &users, Some("Alice"), None).await;

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    let outcome = svc.transition(request_id, "Approved").await.unwrap();
    assert_eq!(outcome.request.status, OutpassStatus::Approved);
    assert!(matches!(
        outcome.notification,
        NotificationOutcome::Skipped { .. }
    ));
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn empty_email_skips_notification() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) = seed_request(&requests, &users, Some("Alice"), Some("")).await;

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    let outcome = svc.transition(request_id, "Rejected").await.unwrap();
    assert!(matches!(
        outcome.notification,
        NotificationOutcome::Skipped { .. }
    ));
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn missing_owner_skips_notification() {
    let (requests, users, _db) = setup().await;

    // A request whose owner does not exist in the user store.
    let request = requests
        .create(CreateOutpassRequest {
            user_id: Uuid::new_v4(),
        })
        .await
        .unwrap();

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    let outcome = svc.transition(request.id, "Approved").await.unwrap();
    assert_eq!(outcome.request.status, OutpassStatus::Approved);
    assert!(matches!(
        outcome.notification,
        NotificationOutcome::Skipped { .. }
    ));
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn slow_notifier_counts_as_failed_delivery() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) =
        seed_request(&requests, &users, Some("Alice"), Some("a@b.com")).await;

    let svc = TransitionService::new(
        requests.clone(),
        users,
        HangingNotifier,
        WorkflowConfig {
            notify_timeout: Duration::from_millis(100),
        },
    );

    let outcome = svc.transition(request_id, "Approved").await.unwrap();

    // The commit stands; the hung delivery is reported as a failure.
    let stored = requests.get_by_id(request_id).await.unwrap();
    assert_eq!(stored.status, OutpassStatus::Approved);

    match outcome.notification {
        NotificationOutcome::Failed { ref error } => {
            assert!(error.contains("timed out"), "unexpected diagnostic: {error}");
        }
        other => panic!("expected Failed, got {other:?}"),
    }
}

#[tokio::test]
async fn repeated_transition_succeeds_again() {
    let (requests, users, _db) = setup().await;
    let (_user_id, request_id) =
        seed_request(&requests, &users, Some("Alice"), Some("a@b.com")).await;

    let notifier = RecordingNotifier::default();
    let svc = service(requests.clone(), users, notifier.clone());

    svc.transition(request_id, "Approved").await.unwrap();
    let second = svc.transition(request_id, "Approved").await.unwrap();

    assert_eq!(second.request.status, OutpassStatus::Approved);
    // Repeats may re-notify; there is no dedup key.
    assert_eq!(notifier.calls().len(), 2);
}
