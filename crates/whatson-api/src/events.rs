// Event listing routes

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;
use whatson_core::{Event, ListResponse};
use whatson_storage::Database;

use crate::services::EventService;

/// App state for event routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<EventService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(EventService::new(db)),
        }
    }
}

/// Create event routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/events", get(list_events))
        .route("/v1/events/probe", get(probe_events))
        .with_state(state)
}

/// Whether the store holds any event row at all
#[derive(Debug, Serialize, ToSchema)]
pub struct ProbeResponse {
    pub has_events: bool,
}

/// GET /v1/events - List active events ordered by start date ascending
#[utoipa::path(
    get,
    path = "/v1/events",
    responses(
        (status = 200, description = "List of active events", body = ListResponse<Event>),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<Event>>, StatusCode> {
    let events = state.service.list().await.map_err(|e| {
        tracing::error!("Failed to list events: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(ListResponse::new(events)))
}

/// GET /v1/events/probe - Existence probe used by client startup
#[utoipa::path(
    get,
    path = "/v1/events/probe",
    responses(
        (status = 200, description = "Probe result", body = ProbeResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "events"
)]
pub async fn probe_events(State(state): State<AppState>) -> Result<Json<ProbeResponse>, StatusCode> {
    let has_events = state.service.any_exists().await.map_err(|e| {
        tracing::error!("Failed to probe events: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    Ok(Json(ProbeResponse { has_events }))
}
