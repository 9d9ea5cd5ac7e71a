// Event read service

use anyhow::Result;
use std::sync::Arc;
use whatson_core::Event;
use whatson_storage::Database;

pub struct EventService {
    db: Arc<Database>,
}

impl EventService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// All active events, ordered by start date ascending.
    pub async fn list(&self) -> Result<Vec<Event>> {
        let rows = self.db.list_active_events().await?;
        Ok(rows.into_iter().map(Event::from).collect())
    }

    /// Whether any event row exists at all (startup probe).
    pub async fn any_exists(&self) -> Result<bool> {
        self.db.has_any_events().await
    }
}
