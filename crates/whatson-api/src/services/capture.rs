// Email capture service

use anyhow::Result;
use std::sync::Arc;
use uuid::Uuid;
use whatson_storage::{Database, NewEmailCapture};

pub struct CaptureService {
    db: Arc<Database>,
}

impl CaptureService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Record one capture. Validation happens at the route boundary; this
    /// only persists.
    pub async fn create(&self, email: String, event_id: Uuid) -> Result<Uuid> {
        let row = self
            .db
            .insert_email_capture(NewEmailCapture { email, event_id })
            .await?;

        Ok(row.id)
    }
}
