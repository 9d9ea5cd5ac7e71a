// Event sources feeding the sync endpoint
//
// Decision: keep the loop logic source-agnostic via the EventSource trait;
// the demo generator is the only implementation for now and real per-site
// fetchers slot in beside it.

mod demo;

pub use demo::DemoSource;

use chrono::{DateTime, Utc};

/// Candidate event produced by a source.
///
/// The sync service matches candidates against stored rows by
/// `original_url` and updates in place rather than duplicating.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrapedEvent {
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

/// A producer of candidate events.
pub trait EventSource: Send + Sync {
    /// Tag recorded on every event this source produces.
    fn tag(&self) -> &'static str;

    /// Produce the current candidate set, dated relative to `now`.
    fn scrape(&self, now: DateTime<Utc>) -> Vec<ScrapedEvent>;
}

/// Which sources a sync request selects. Parsed from the `source` query
/// parameter; unrecognized values select nothing (the sync still succeeds
/// with zero candidates).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SourceSelector {
    #[default]
    All,
    Demo,
    Unknown,
}

impl SourceSelector {
    /// The sources this selector activates.
    pub fn sources(&self) -> Vec<Box<dyn EventSource>> {
        match self {
            SourceSelector::All | SourceSelector::Demo => vec![Box::new(DemoSource)],
            SourceSelector::Unknown => Vec::new(),
        }
    }
}

impl From<&str> for SourceSelector {
    fn from(s: &str) -> Self {
        match s {
            "all" => SourceSelector::All,
            "demo" => SourceSelector::Demo,
            _ => SourceSelector::Unknown,
        }
    }
}
