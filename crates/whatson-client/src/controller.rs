// Page state controller
//
// Owns everything the page renders from: the fetched events, the search and
// category filters, the loading flags, and the currently selected event for
// the capture modal. The filtered list is recomputed on demand rather than
// stored, so it can never drift out of sync with its inputs.

use whatson_core::{filter_events, Category, Event};

use crate::backend::EventsBackend;

pub struct EventBrowser<B: EventsBackend> {
    backend: B,
    events: Vec<Event>,
    loading: bool,
    refreshing: bool,
    search_query: String,
    selected_category: Category,
    selected_event: Option<Event>,
}

impl<B: EventsBackend> EventBrowser<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            events: Vec::new(),
            loading: true,
            refreshing: false,
            search_query: String::new(),
            selected_category: Category::All,
            selected_event: None,
        }
    }

    /// First load: probe the store, run one sync pass if it is empty, then
    /// fetch the listing once. Strictly sequential, so a fresh deployment
    /// never renders an empty page while the first sync is still running.
    pub async fn initialize(&mut self) {
        match self.backend.has_events().await {
            Ok(true) => {}
            Ok(false) => self.run_sync().await,
            Err(e) => tracing::error!("Startup probe failed: {}", e),
        }
        self.fetch_events().await;
    }

    /// Manual refresh from the header button: sync, then refetch on success.
    pub async fn refresh(&mut self) {
        self.refreshing = true;
        match self.backend.trigger_scrape().await {
            Ok(summary) => {
                tracing::info!("{}", summary.message);
                self.fetch_events().await;
            }
            Err(e) => tracing::error!("Refresh failed: {}", e),
        }
        self.refreshing = false;
    }

    async fn run_sync(&mut self) {
        self.refreshing = true;
        if let Err(e) = self.backend.trigger_scrape().await {
            tracing::error!("Initial sync failed: {}", e);
        }
        self.refreshing = false;
    }

    /// Replace the event list from the backend. A failed fetch keeps the
    /// previous list on screen; the loading flag clears either way.
    pub async fn fetch_events(&mut self) {
        match self.backend.list_events().await {
            Ok(events) => self.events = events,
            Err(e) => tracing::error!("Failed to fetch events: {}", e),
        }
        self.loading = false;
    }

    /// Events matching the current search query and category.
    pub fn filtered_events(&self) -> Vec<Event> {
        filter_events(&self.events, &self.search_query, self.selected_category)
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_selected_category(&mut self, category: Category) {
        self.selected_category = category;
    }

    pub fn select_event(&mut self, event: Event) {
        self.selected_event = Some(event);
    }

    pub fn close_modal(&mut self) {
        self.selected_event = None;
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn is_refreshing(&self) -> bool {
        self.refreshing
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn selected_category(&self) -> Category {
        self.selected_category
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected_event.as_ref()
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
    use whatson_core::sources::{EventSource, ScrapedEvent};
    use whatson_core::{DemoSource, ScrapeSummary};

    /// In-memory backend: trigger_scrape fills the store from the demo
    /// source, list_events returns it sorted by start date.
    struct FakeBackend {
        events: Mutex<Vec<Event>>,
        fail_probe: bool,
        fail_scrape: bool,
        fail_list: bool,
    }

    impl FakeBackend {
        fn empty() -> Self {
            Self {
                events: Mutex::new(Vec::new()),
                fail_probe: false,
                fail_scrape: false,
                fail_list: false,
            }
        }

        fn seeded() -> Self {
            let backend = Self::empty();
            backend.fill();
            backend
        }

        fn fill(&self) {
            let now = Utc::now();
            let mut events: Vec<Event> = DemoSource
                .scrape(now)
                .into_iter()
                .map(materialize)
                .collect();
            events.sort_by_key(|e| e.event_date);
            *self.events.lock().unwrap() = events;
        }
    }

    fn materialize(scraped: ScrapedEvent) -> Event {
        let now = Utc::now();
        Event {
            id: Uuid::now_v7(),
            title: scraped.title,
            description: scraped.description,
            event_date: scraped.event_date,
            event_end_date: scraped.event_end_date,
            venue: scraped.venue,
            address: scraped.address,
            image_url: scraped.image_url,
            original_url: scraped.original_url,
            ticket_url: scraped.ticket_url,
            price: scraped.price,
            category: scraped.category,
            source: scraped.source,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    fn transport_error() -> BackendError {
        BackendError::ScrapeFailed(500)
    }

    #[async_trait]
    impl EventsBackend for FakeBackend {
        async fn has_events(&self) -> Result<bool, BackendError> {
            if self.fail_probe {
                return Err(transport_error());
            }
            Ok(!self.events.lock().unwrap().is_empty())
        }

        async fn list_events(&self) -> Result<Vec<Event>, BackendError> {
            if self.fail_list {
                return Err(transport_error());
            }
            Ok(self.events.lock().unwrap().clone())
        }

        async fn trigger_scrape(&self) -> Result<ScrapeSummary, BackendError> {
            if self.fail_scrape {
                return Err(transport_error());
            }
            self.fill();
            Ok(ScrapeSummary {
                success: true,
                message: "Scraped 12 events".to_string(),
                inserted: 12,
                updated: 0,
            })
        }

        async fn submit_capture(&self, _email: &str, _event_id: Uuid) -> Result<(), BackendError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_initialize_syncs_an_empty_store_then_fetches() {
        let mut browser = EventBrowser::new(FakeBackend::empty());
        assert!(browser.is_loading());

        browser.initialize().await;

        assert!(!browser.is_loading());
        assert!(!browser.is_refreshing());
        assert_eq!(browser.events().len(), 12);
        // Listing comes back ordered by start date
        for pair in browser.events().windows(2) {
            assert!(pair[0].event_date <= pair[1].event_date);
        }
    }

    #[tokio::test]
    async fn test_initialize_skips_sync_when_events_exist() {
        let backend = FakeBackend::seeded();
        // A scrape would blow up if attempted
        let backend = FakeBackend {
            fail_scrape: true,
            ..backend
        };
        let mut browser = EventBrowser::new(backend);

        browser.initialize().await;

        assert_eq!(browser.events().len(), 12);
    }

    #[tokio::test]
    async fn test_initialize_still_fetches_when_probe_fails() {
        let backend = FakeBackend {
            fail_probe: true,
            ..FakeBackend::seeded()
        };
        let mut browser = EventBrowser::new(backend);

        browser.initialize().await;

        assert!(!browser.is_loading());
        assert_eq!(browser.events().len(), 12);
    }

    #[tokio::test]
    async fn test_search_filters_by_title_description_and_venue() {
        let mut browser = EventBrowser::new(FakeBackend::empty());
        browser.initialize().await;

        browser.set_search_query("opera");
        let matches = browser.filtered_events();
        assert!(!matches.is_empty());
        for event in &matches {
            let haystack = format!(
                "{} {} {}",
                event.title.to_lowercase(),
                event.description.to_lowercase(),
                event.venue.to_lowercase()
            );
            assert!(haystack.contains("opera"));
        }
    }

    #[tokio::test]
    async fn test_category_filter_narrows_the_list() {
        let mut browser = EventBrowser::new(FakeBackend::empty());
        browser.initialize().await;

        browser.set_selected_category(Category::Music);
        let matches = browser.filtered_events();
        assert!(!matches.is_empty());
        assert!(matches.len() < browser.events().len());
        for event in &matches {
            assert_eq!(event.category.as_deref(), Some("Music"));
        }

        browser.set_selected_category(Category::All);
        assert_eq!(browser.filtered_events().len(), browser.events().len());
    }

    #[tokio::test]
    async fn test_refresh_failure_clears_the_flag_and_keeps_events() {
        let backend = FakeBackend {
            fail_scrape: true,
            ..FakeBackend::seeded()
        };
        let mut browser = EventBrowser::new(backend);
        browser.initialize().await;
        let before = browser.events().len();

        browser.refresh().await;

        assert!(!browser.is_refreshing());
        assert_eq!(browser.events().len(), before);
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_the_previous_list() {
        let mut browser = EventBrowser::new(FakeBackend::empty());
        browser.initialize().await;
        assert_eq!(browser.events().len(), 12);

        browser.backend.fail_list = true;
        browser.fetch_events().await;

        assert!(!browser.is_loading());
        assert_eq!(browser.events().len(), 12);
    }

    #[tokio::test]
    async fn test_modal_selection_round_trip() {
        let mut browser = EventBrowser::new(FakeBackend::empty());
        browser.initialize().await;

        let event = browser.events()[0].clone();
        browser.select_event(event.clone());
        assert_eq!(
            browser.selected_event().map(|e| e.id),
            Some(event.id)
        );

        browser.close_modal();
        assert!(browser.selected_event().is_none());
    }
}
