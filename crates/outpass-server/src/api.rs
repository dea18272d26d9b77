//! HTTP API — application state, router, and request handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use outpass_core::models::outpass_request::CreateOutpassRequest;
use outpass_core::repository::OutpassRequestRepository;
use outpass_db::repository::{SurrealOutpassRequestRepository, SurrealUserRepository};
use outpass_notify::LogNotifier;
use outpass_workflow::{TransitionError, TransitionService};
use serde::Deserialize;
use surrealdb::Connection;
use tokio::net::TcpListener;
use tracing::{error, info};
use uuid::Uuid;

/// Shared state behind every handler.
///
/// Generic over the storage engine so tests can run the full handler
/// stack against an in-memory database.
pub struct AppState<C: Connection> {
    pub service: TransitionService<
        SurrealOutpassRequestRepository<C>,
        SurrealUserRepository<C>,
        LogNotifier,
    >,
    pub requests: SurrealOutpassRequestRepository<C>,
}

pub async fn run_server<C: Connection>(
    addr: &str,
    state: Arc<AppState<C>>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "E-Outpass API listening");
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router<C: Connection>(state: Arc<AppState<C>>) -> Router {
    Router::new()
        .route("/", get(handle_root))
        .route("/api/outpass/request", post(handle_create_request::<C>))
        .route("/api/outpass/update-status", post(handle_update_status::<C>))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateRequestBody {
    user_id: Uuid,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateStatusRequest {
    outpass_id: String,
    status: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn handle_root() -> &'static str {
    "E-Outpass API is running!"
}

async fn handle_create_request<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(payload): Json<CreateRequestBody>,
) -> Response {
    match state
        .requests
        .create(CreateOutpassRequest {
            user_id: payload.user_id,
        })
        .await
    {
        Ok(request) => (
            StatusCode::CREATED,
            Json(serde_json::json!({
                "id": request.id,
                "userId": request.user_id,
                "status": request.status,
                "createdAt": request.created_at,
                "updatedAt": request.updated_at,
            })),
        )
            .into_response(),
        Err(err) => {
            error!(error = %err, "Failed to create outpass request");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "message": "Failed to create outpass request.",
                    "error": err.to_string(),
                })),
            )
                .into_response()
        }
    }
}

async fn handle_update_status<C: Connection>(
    State(state): State<Arc<AppState<C>>>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Response {
    // An id that does not parse can match no record.
    let Ok(request_id) = Uuid::parse_str(&payload.outpass_id) else {
        return not_found_response();
    };

    match state.service.transition(request_id, &payload.status).await {
        Ok(outcome) => {
            info!(
                request_id = %outcome.request.id,
                status = %outcome.request.status,
                delivered = outcome.notification.is_delivered(),
                "Outpass status updated"
            );
            Json(serde_json::json!({
                "message": "Outpass status updated successfully and notification sent."
            }))
            .into_response()
        }
        Err(err @ TransitionError::InvalidStatus { .. }) => (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({
                "message": "Invalid outpass status.",
                "error": err.to_string(),
            })),
        )
            .into_response(),
        Err(TransitionError::RequestNotFound { .. }) => not_found_response(),
        Err(TransitionError::Storage(err)) => {
            error!(error = %err, "Error updating outpass status");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "message": "Failed to update outpass status.",
                    "error": err,
                })),
            )
                .into_response()
        }
    }
}

fn not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "message": "Outpass request not found." })),
    )
        .into_response()
}
