// Whatson API server
// Decision: permissive CORS - the browser client may be served from any origin
// Decision: the sync endpoint keeps the /functions/v1 path of the original deployment

mod captures;
mod events;
mod scrape;
mod services;

use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use whatson_core::{Event, ListResponse, ScrapeFailure, ScrapeSummary};
use whatson_storage::Database;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        events::list_events,
        events::probe_events,
        captures::create_capture,
        scrape::scrape_events,
    ),
    components(
        schemas(
            Event,
            ListResponse<Event>,
            events::ProbeResponse,
            captures::CreateEmailCaptureRequest,
            captures::CaptureCreated,
            captures::FieldError,
            ScrapeSummary,
            ScrapeFailure,
        )
    ),
    tags(
        (name = "events", description = "Event listing endpoints"),
        (name = "captures", description = "Email capture endpoints"),
        (name = "sync", description = "Event sync endpoint")
    ),
    info(
        title = "Whatson API",
        version = "0.1.0",
        description = "Sydney event listing, sync, and email capture endpoints",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    )
)]
struct ApiDoc;

/// Permissive CORS: any origin, the methods and headers the browser client
/// sends. Preflight OPTIONS requests are answered by this layer.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "whatson_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("whatson-api starting...");

    // Initialize database
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL environment variable required")?;
    let db = Database::from_url(&database_url)
        .await
        .context("Failed to connect to database")?;
    db.run_migrations().await?;
    tracing::info!("Connected to database");

    // Bearer credential for the sync endpoint (optional - open when unset)
    let bearer_token = std::env::var("SCRAPE_BEARER_TOKEN")
        .ok()
        .filter(|token| !token.is_empty());
    if bearer_token.is_none() {
        tracing::warn!("SCRAPE_BEARER_TOKEN not set; the sync endpoint is open");
    }

    let db = Arc::new(db);

    let app = Router::new()
        .route("/health", get(health))
        .merge(events::routes(events::AppState::new(db.clone())))
        .merge(captures::routes(captures::AppState::new(db.clone())))
        .merge(scrape::routes(scrape::AppState::new(db, bearer_token)))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http());

    // Start server
    let port = std::env::var("PORT").unwrap_or_else(|_| "8080".to_string());
    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
