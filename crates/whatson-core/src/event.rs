// Event DTOs shared by the API service and the client

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Fallback image shown when an event carries no image of its own.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://images.pexels.com/photos/1105666/pexels-photo-1105666.jpeg?auto=compress&cs=tinysrgb&w=1200";

/// A dated occurrence shown to users, uniquely keyed by its source URL.
///
/// Rows are created and updated only by the sync service; everything else
/// treats them as read-only.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_end_date: Option<DateTime<Utc>>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub original_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub source: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// URL the user is sent to after a capture; `ticket_url` when present,
    /// otherwise `original_url`.
    pub fn redirect_url(&self) -> &str {
        self.ticket_url.as_deref().unwrap_or(&self.original_url)
    }

    /// Image to display, falling back to the shared placeholder.
    pub fn display_image_url(&self) -> &str {
        self.image_url.as_deref().unwrap_or(PLACEHOLDER_IMAGE_URL)
    }
}

/// Response wrapper for list endpoints
/// All list endpoints return responses wrapped in a `data` field
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ListResponse<T> {
    pub data: Vec<T>,
}

impl<T> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Summary returned by the sync endpoint on success
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ScrapeSummary {
    pub success: bool,
    pub message: String,
    pub inserted: usize,
    pub updated: usize,
}

/// Error body returned by the sync endpoint on failure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(ToSchema))]
pub struct ScrapeFailure {
    pub success: bool,
    pub error: String,
}

impl ScrapeFailure {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(ticket_url: Option<&str>, image_url: Option<&str>) -> Event {
        Event {
            id: Uuid::now_v7(),
            title: "Test Event".to_string(),
            description: String::new(),
            event_date: Utc::now(),
            event_end_date: None,
            venue: String::new(),
            address: None,
            image_url: image_url.map(String::from),
            original_url: "https://example.com/event".to_string(),
            ticket_url: ticket_url.map(String::from),
            price: None,
            category: None,
            source: "demo".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_redirect_url_prefers_ticket_url() {
        let e = event(Some("https://example.com/tickets"), None);
        assert_eq!(e.redirect_url(), "https://example.com/tickets");
    }

    #[test]
    fn test_redirect_url_falls_back_to_original_url() {
        let e = event(None, None);
        assert_eq!(e.redirect_url(), "https://example.com/event");
    }

    #[test]
    fn test_display_image_falls_back_to_placeholder() {
        let e = event(None, None);
        assert_eq!(e.display_image_url(), PLACEHOLDER_IMAGE_URL);

        let e = event(None, Some("https://example.com/pic.jpg"));
        assert_eq!(e.display_image_url(), "https://example.com/pic.jpg");
    }
}
