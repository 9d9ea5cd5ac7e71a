// Sync ("scrape") endpoint
//
// GET /functions/v1/scrape-events?source={all|demo}, guarded by a bearer
// credential when one is configured. Preflight requests are answered by the
// permissive CORS layer installed in main.

use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use whatson_core::{ScrapeFailure, ScrapeSummary, SourceSelector};
use whatson_storage::Database;

use crate::services::ScrapeService;

/// App state for the sync route
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ScrapeService>,
    /// When set, requests must present `Authorization: Bearer <token>`.
    pub bearer_token: Option<String>,
}

impl AppState {
    pub fn new(db: Arc<Database>, bearer_token: Option<String>) -> Self {
        Self {
            service: Arc::new(ScrapeService::new(db)),
            bearer_token,
        }
    }
}

/// Create the sync route
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/functions/v1/scrape-events", get(scrape_events))
        .with_state(state)
}

#[derive(Debug, Deserialize)]
pub struct ScrapeQuery {
    pub source: Option<String>,
}

/// GET /functions/v1/scrape-events - Run one sync pass
#[utoipa::path(
    get,
    path = "/functions/v1/scrape-events",
    params(
        ("source" = Option<String>, Query, description = "Source selector: all (default) or demo")
    ),
    responses(
        (status = 200, description = "Sync summary", body = ScrapeSummary),
        (status = 401, description = "Missing or invalid bearer credential", body = ScrapeFailure),
        (status = 500, description = "Sync failed", body = ScrapeFailure)
    ),
    tag = "sync"
)]
pub async fn scrape_events(
    State(state): State<AppState>,
    Query(query): Query<ScrapeQuery>,
    headers: HeaderMap,
) -> Result<Json<ScrapeSummary>, (StatusCode, Json<ScrapeFailure>)> {
    if !authorized(&headers, state.bearer_token.as_deref()) {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ScrapeFailure::new("invalid bearer credential")),
        ));
    }

    let selector = SourceSelector::from(query.source.as_deref().unwrap_or("all"));
    let summary = state.service.run(selector).await.map_err(|e| {
        tracing::error!("Sync failed: {}", e);
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ScrapeFailure::new(e.to_string())),
        )
    })?;

    Ok(Json(summary))
}

/// Bearer check. An unset expected token leaves the endpoint open.
fn authorized(headers: &HeaderMap, expected: Option<&str>) -> bool {
    let Some(expected) = expected else {
        return true;
    };
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token == expected)
        .unwrap_or(false)
}
