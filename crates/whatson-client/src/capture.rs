// Email-capture flow behind the ticket modal
//
// The modal collects an email before sending the user on to the ticket
// page. Validation happens here before any network call; a failed insert
// leaves the form open with a retry message.

use whatson_core::{is_plausible_email, Event};

use crate::backend::EventsBackend;

pub const INVALID_EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const CAPTURE_FAILED_MESSAGE: &str = "Failed to save email. Please try again.";

/// State of the capture form for one selected event.
#[derive(Debug, Clone)]
pub struct CaptureForm {
    pub event_id: uuid::Uuid,
    pub event_title: String,
    redirect_url: String,
    pub email: String,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl CaptureForm {
    pub fn for_event(event: &Event) -> Self {
        Self {
            event_id: event.id,
            event_title: event.title.clone(),
            redirect_url: event.redirect_url().to_string(),
            email: String::new(),
            is_submitting: false,
            error: None,
        }
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Submit the form. Returns the redirect URL on success; on failure the
    /// form keeps its state and `error` carries the message to display.
    pub async fn submit<B: EventsBackend>(&mut self, backend: &B) -> Option<String> {
        self.error = None;

        if !is_plausible_email(&self.email) {
            self.error = Some(INVALID_EMAIL_MESSAGE.to_string());
            return None;
        }

        self.is_submitting = true;
        let result = backend.submit_capture(&self.email, self.event_id).await;
        self.is_submitting = false;

        match result {
            Ok(()) => Some(self.redirect_url.clone()),
            Err(e) => {
                tracing::error!("Error saving email: {}", e);
                self.error = Some(CAPTURE_FAILED_MESSAGE.to_string());
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::BackendError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;
    use uuid::Uuid;

    struct RecordingBackend {
        captures: Mutex<Vec<(String, Uuid)>>,
        fail: bool,
    }

    impl RecordingBackend {
        fn new(fail: bool) -> Self {
            Self {
                captures: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl EventsBackend for RecordingBackend {
        async fn has_events(&self) -> Result<bool, BackendError> {
            Ok(true)
        }

        async fn list_events(&self) -> Result<Vec<Event>, BackendError> {
            Ok(Vec::new())
        }

        async fn trigger_scrape(&self) -> Result<whatson_core::ScrapeSummary, BackendError> {
            Err(BackendError::ScrapeFailed(500))
        }

        async fn submit_capture(&self, email: &str, event_id: Uuid) -> Result<(), BackendError> {
            if self.fail {
                return Err(BackendError::CaptureFailed(500));
            }
            self.captures
                .lock()
                .unwrap()
                .push((email.to_string(), event_id));
            Ok(())
        }
    }

    fn event(ticket_url: Option<&str>) -> Event {
        Event {
            id: Uuid::now_v7(),
            title: "Sydney Jazz Festival".to_string(),
            description: String::new(),
            event_date: Utc::now(),
            event_end_date: None,
            venue: "The Basement".to_string(),
            address: None,
            image_url: None,
            original_url: "https://sydneyjazzfest.com.au".to_string(),
            ticket_url: ticket_url.map(String::from),
            price: None,
            category: Some("Music".to_string()),
            source: "demo".to_string(),
            is_active: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_invalid_email_is_rejected_before_any_network_call() {
        let backend = RecordingBackend::new(false);
        let mut form = CaptureForm::for_event(&event(None));
        form.set_email("not-an-email");

        let redirect = form.submit(&backend).await;

        assert!(redirect.is_none());
        assert_eq!(form.error.as_deref(), Some(INVALID_EMAIL_MESSAGE));
        assert!(backend.captures.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_capture_returns_the_ticket_url() {
        let backend = RecordingBackend::new(false);
        let e = event(Some("https://tickets.example/jazz"));
        let mut form = CaptureForm::for_event(&e);
        form.set_email("person@example.com");

        let redirect = form.submit(&backend).await;

        assert_eq!(redirect.as_deref(), Some("https://tickets.example/jazz"));
        assert!(form.error.is_none());
        assert!(!form.is_submitting);
        let captures = backend.captures.lock().unwrap();
        assert_eq!(captures.as_slice(), &[("person@example.com".to_string(), e.id)]);
    }

    #[tokio::test]
    async fn test_redirect_falls_back_to_the_original_url() {
        let backend = RecordingBackend::new(false);
        let mut form = CaptureForm::for_event(&event(None));
        form.set_email("person@example.com");

        let redirect = form.submit(&backend).await;

        assert_eq!(redirect.as_deref(), Some("https://sydneyjazzfest.com.au"));
    }

    #[tokio::test]
    async fn test_failed_insert_keeps_the_form_open_with_a_retry_message() {
        let backend = RecordingBackend::new(true);
        let mut form = CaptureForm::for_event(&event(None));
        form.set_email("person@example.com");

        let redirect = form.submit(&backend).await;

        assert!(redirect.is_none());
        assert_eq!(form.error.as_deref(), Some(CAPTURE_FAILED_MESSAGE));
        assert!(!form.is_submitting);
        assert_eq!(form.email, "person@example.com");
    }

    #[tokio::test]
    async fn test_resubmit_clears_the_previous_error() {
        let backend = RecordingBackend::new(false);
        let mut form = CaptureForm::for_event(&event(None));
        form.set_email("nope");
        form.submit(&backend).await;
        assert!(form.error.is_some());

        form.set_email("person@example.com");
        let redirect = form.submit(&backend).await;

        assert!(redirect.is_some());
        assert!(form.error.is_none());
    }
}
