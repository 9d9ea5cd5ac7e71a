// Email capture routes

use axum::{extract::State, http::StatusCode, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;
use uuid::Uuid;
use whatson_core::is_plausible_email;
use whatson_storage::Database;

use crate::services::CaptureService;

/// App state for capture routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<CaptureService>,
}

impl AppState {
    pub fn new(db: Arc<Database>) -> Self {
        Self {
            service: Arc::new(CaptureService::new(db)),
        }
    }
}

/// Create capture routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/v1/email-captures", post(create_capture))
        .with_state(state)
}

/// Request to record a capture before the ticket redirect
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateEmailCaptureRequest {
    pub email: String,
    pub event_id: Uuid,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CaptureCreated {
    pub id: Uuid,
}

/// Inline error body shown in the capture form
#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub error: String,
}

impl FieldError {
    fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

/// POST /v1/email-captures - Record a capture
///
/// Rejects implausible addresses with 422 before any store write.
#[utoipa::path(
    post,
    path = "/v1/email-captures",
    request_body = CreateEmailCaptureRequest,
    responses(
        (status = 201, description = "Capture recorded", body = CaptureCreated),
        (status = 422, description = "Implausible email address", body = FieldError),
        (status = 500, description = "Internal server error", body = FieldError)
    ),
    tag = "captures"
)]
pub async fn create_capture(
    State(state): State<AppState>,
    Json(req): Json<CreateEmailCaptureRequest>,
) -> Result<(StatusCode, Json<CaptureCreated>), (StatusCode, Json<FieldError>)> {
    if !is_plausible_email(&req.email) {
        return Err((
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(FieldError::new("Please enter a valid email address")),
        ));
    }

    let id = state
        .service
        .create(req.email, req.event_id)
        .await
        .map_err(|e| {
            tracing::error!("Failed to insert email capture: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(FieldError::new("Failed to save email. Please try again.")),
            )
        })?;

    Ok((StatusCode::CREATED, Json(CaptureCreated { id })))
}
