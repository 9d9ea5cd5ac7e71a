// Database models (internal, may differ from public DTOs)

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;
use whatson_core::{Event, ScrapedEvent};

// ============================================
// Event models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EventRow {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub venue: String,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub original_url: String,
    pub ticket_url: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub source: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<EventRow> for Event {
    fn from(row: EventRow) -> Self {
        Event {
            id: row.id,
            title: row.title,
            description: row.description,
            event_date: row.event_date,
            event_end_date: row.event_end_date,
            venue: row.venue,
            address: row.address,
            image_url: row.image_url,
            original_url: row.original_url,
            ticket_url: row.ticket_url,
            price: row.price,
            category: row.category,
            source: row.source,
            is_active: row.is_active,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Full record written by the sync service, both for inserts and for
/// in-place updates of an existing row.
#[derive(Debug, Clone)]
pub struct NewEvent {
    pub title: String,
    pub description: String,
    pub event_date: DateTime<Utc>,
    pub event_end_date: Option<DateTime<Utc>>,
    pub venue: String,
    pub address: Option<String>,
    pub image_url: Option<String>,
    pub original_url: String,
    pub ticket_url: Option<String>,
    pub price: Option<String>,
    pub category: Option<String>,
    pub source: String,
}

impl From<ScrapedEvent> for NewEvent {
    fn from(candidate: ScrapedEvent) -> Self {
        NewEvent {
            title: candidate.title,
            description: candidate.description,
            event_date: candidate.event_date,
            event_end_date: candidate.event_end_date,
            venue: candidate.venue,
            address: candidate.address,
            image_url: candidate.image_url,
            original_url: candidate.original_url,
            ticket_url: candidate.ticket_url,
            price: candidate.price,
            category: candidate.category,
            source: candidate.source,
        }
    }
}

/// Lightweight key pair for the upsert lookup.
#[derive(Debug, Clone, FromRow)]
pub struct EventKeyRow {
    pub id: Uuid,
    pub original_url: String,
}

// ============================================
// Email capture models
// ============================================

#[derive(Debug, Clone, FromRow)]
pub struct EmailCaptureRow {
    pub id: Uuid,
    pub email: String,
    pub event_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewEmailCapture {
    pub email: String,
    pub event_id: Uuid,
}
