// Sync service: collect candidates from the selected sources and upsert
// them into the events table by original_url.

use anyhow::Result;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;
use whatson_core::{ScrapeSummary, ScrapedEvent, SourceSelector};
use whatson_storage::Database;

pub struct ScrapeService {
    db: Arc<Database>,
}

/// Insert/update split of one candidate set against the stored keys.
#[derive(Debug, Default)]
pub struct SyncPlan {
    pub inserts: Vec<ScrapedEvent>,
    pub updates: Vec<(Uuid, ScrapedEvent)>,
}

/// Pure upsert decision: candidates whose `original_url` is already stored
/// become updates of that row, the rest become inserts. Syncing an
/// unchanged candidate set twice therefore yields zero new rows on the
/// second run.
pub fn plan_sync(known: &HashMap<String, Uuid>, candidates: Vec<ScrapedEvent>) -> SyncPlan {
    let mut plan = SyncPlan::default();
    for candidate in candidates {
        match known.get(&candidate.original_url) {
            Some(id) => plan.updates.push((*id, candidate)),
            None => plan.inserts.push(candidate),
        }
    }
    plan
}

impl ScrapeService {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// Run one sync pass.
    ///
    /// No locking: concurrent invocations can still race between the key
    /// snapshot and the writes; the unique index on original_url turns
    /// that race into an insert error instead of a duplicate row.
    pub async fn run(&self, selector: SourceSelector) -> Result<ScrapeSummary> {
        let now = Utc::now();
        let mut candidates = Vec::new();
        for source in selector.sources() {
            let scraped = source.scrape(now);
            tracing::info!(
                source = source.tag(),
                count = scraped.len(),
                "Collected candidates"
            );
            candidates.extend(scraped);
        }

        let known: HashMap<String, Uuid> = self
            .db
            .list_event_keys()
            .await?
            .into_iter()
            .map(|key| (key.original_url, key.id))
            .collect();

        let scraped = candidates.len();
        let plan = plan_sync(&known, candidates);
        let (inserted, updated) = (plan.inserts.len(), plan.updates.len());

        for (id, candidate) in plan.updates {
            self.db.update_event(id, candidate.into()).await?;
        }
        for candidate in plan.inserts {
            self.db.insert_event(candidate.into()).await?;
        }

        Ok(ScrapeSummary {
            success: true,
            message: format!("Scraped {scraped} events"),
            inserted,
            updated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use whatson_core::{DemoSource, EventSource};

    #[test]
    fn test_first_sync_inserts_everything() {
        let candidates = DemoSource.scrape(Utc::now());
        let plan = plan_sync(&HashMap::new(), candidates.clone());

        assert_eq!(plan.inserts.len(), candidates.len());
        assert!(plan.updates.is_empty());
    }

    #[test]
    fn test_second_sync_with_unchanged_set_only_updates() {
        let candidates = DemoSource.scrape(Utc::now());

        // First run against an empty store; pretend every insert landed.
        let first = plan_sync(&HashMap::new(), candidates.clone());
        let known: HashMap<String, Uuid> = first
            .inserts
            .iter()
            .map(|c| (c.original_url.clone(), Uuid::now_v7()))
            .collect();

        let second = plan_sync(&known, candidates.clone());
        assert!(second.inserts.is_empty());
        assert_eq!(second.updates.len(), candidates.len());
    }

    #[test]
    fn test_updates_target_the_stored_row() {
        let candidates = DemoSource.scrape(Utc::now());
        let id = Uuid::now_v7();
        let url = candidates[0].original_url.clone();
        let known = HashMap::from([(url.clone(), id)]);

        let plan = plan_sync(&known, candidates);
        let (target, candidate) = plan
            .updates
            .iter()
            .find(|(_, c)| c.original_url == url)
            .unwrap();
        assert_eq!(*target, id);
        assert_eq!(candidate.original_url, url);
    }
}
