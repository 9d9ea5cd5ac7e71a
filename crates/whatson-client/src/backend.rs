// Backend boundary for the browser client
//
// The controller reaches the API only through the EventsBackend trait;
// HttpBackend is the reqwest implementation against whatson-api.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;
use whatson_core::{Event, ListResponse, ScrapeSummary};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("sync endpoint returned status {0}")]
    ScrapeFailed(u16),
    #[error("capture insert returned status {0}")]
    CaptureFailed(u16),
}

/// Everything the controller needs from the server side.
#[async_trait]
pub trait EventsBackend: Send + Sync {
    /// Startup probe: does the store hold any event at all?
    async fn has_events(&self) -> Result<bool, BackendError>;

    /// All active events, ordered by start date ascending.
    async fn list_events(&self) -> Result<Vec<Event>, BackendError>;

    /// Invoke the sync endpoint.
    async fn trigger_scrape(&self) -> Result<ScrapeSummary, BackendError>;

    /// Record an email capture for one event.
    async fn submit_capture(&self, email: &str, event_id: Uuid) -> Result<(), BackendError>;
}

/// reqwest-backed implementation against the Whatson API.
pub struct HttpBackend {
    http: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProbeBody {
    has_events: bool,
}

#[derive(Debug, Serialize)]
struct CaptureBody<'a> {
    email: &'a str,
    event_id: Uuid,
}

impl HttpBackend {
    pub fn new(base_url: impl Into<String>, bearer_token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            bearer_token,
        }
    }

    /// Configuration from the environment: `WHATSON_API_URL` (defaults to
    /// localhost) and `WHATSON_API_TOKEN` for the sync credential.
    pub fn from_env() -> Self {
        let base_url = std::env::var("WHATSON_API_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let bearer_token = std::env::var("WHATSON_API_TOKEN")
            .ok()
            .filter(|token| !token.is_empty());
        Self::new(base_url, bearer_token)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl EventsBackend for HttpBackend {
    async fn has_events(&self) -> Result<bool, BackendError> {
        let probe: ProbeBody = self
            .http
            .get(self.url("/v1/events/probe"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(probe.has_events)
    }

    async fn list_events(&self) -> Result<Vec<Event>, BackendError> {
        let list: ListResponse<Event> = self
            .http
            .get(self.url("/v1/events"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(list.data)
    }

    async fn trigger_scrape(&self) -> Result<ScrapeSummary, BackendError> {
        let mut request = self.http.get(self.url("/functions/v1/scrape-events"));
        if let Some(token) = &self.bearer_token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(BackendError::ScrapeFailed(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }

    async fn submit_capture(&self, email: &str, event_id: Uuid) -> Result<(), BackendError> {
        let response = self
            .http
            .post(self.url("/v1/email-captures"))
            .json(&CaptureBody { email, event_id })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(BackendError::CaptureFailed(response.status().as_u16()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_probe_reads_has_events() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/events/probe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"has_events": true})))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri(), None);
        assert!(backend.has_events().await.unwrap());
    }

    #[tokio::test]
    async fn test_list_unwraps_the_data_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/events"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"data": []})),
            )
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri(), None);
        assert!(backend.list_events().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_scrape_sends_the_bearer_credential() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/functions/v1/scrape-events"))
            .and(header("authorization", "Bearer sync-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "message": "Scraped 12 events",
                "inserted": 12,
                "updated": 0
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri(), Some("sync-secret".to_string()));
        let summary = backend.trigger_scrape().await.unwrap();
        assert!(summary.success);
        assert_eq!(summary.inserted, 12);
    }

    #[tokio::test]
    async fn test_scrape_rejection_surfaces_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/functions/v1/scrape-events"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "success": false,
                "message": "invalid bearer credential"
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri(), None);
        match backend.trigger_scrape().await {
            Err(BackendError::ScrapeFailed(status)) => assert_eq!(status, 401),
            other => panic!("expected ScrapeFailed, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_capture_posts_email_and_event_id() {
        let server = MockServer::start().await;
        let event_id = Uuid::now_v7();
        Mock::given(method("POST"))
            .and(path("/v1/email-captures"))
            .and(body_partial_json(json!({
                "email": "person@example.com",
                "event_id": event_id
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({"id": Uuid::now_v7()})))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri(), None);
        backend
            .submit_capture("person@example.com", event_id)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_capture_failure_surfaces_the_status() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/email-captures"))
            .respond_with(ResponseTemplate::new(500).set_body_json(json!({
                "error": "Failed to save email. Please try again."
            })))
            .mount(&server)
            .await;

        let backend = HttpBackend::new(server.uri(), None);
        match backend.submit_capture("person@example.com", Uuid::now_v7()).await {
            Err(BackendError::CaptureFailed(status)) => assert_eq!(status, 500),
            other => panic!("expected CaptureFailed, got {other:?}"),
        }
    }
}
