// Search and category filtering for the event list
//
// The filtered view is a pure function of (events, query, category); the
// client recomputes it on demand instead of caching a derived field.

use crate::category::Category;
use crate::event::Event;

/// Filter events by free-text search and category selection.
///
/// A non-empty query keeps events whose title, description, or venue
/// contains it case-insensitively (any of the three suffices). A selection
/// other than `All` then keeps events whose category matches the selection
/// label exactly. The combined result is the intersection of both
/// predicates.
pub fn filter_events(events: &[Event], query: &str, category: Category) -> Vec<Event> {
    let query = query.to_lowercase();
    events
        .iter()
        .filter(|event| matches_query(event, &query))
        .filter(|event| matches_category(event, category))
        .cloned()
        .collect()
}

fn matches_query(event: &Event, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    event.title.to_lowercase().contains(query)
        || event.description.to_lowercase().contains(query)
        || event.venue.to_lowercase().contains(query)
}

fn matches_category(event: &Event, category: Category) -> bool {
    match category {
        Category::All => true,
        selected => event.category.as_deref() == Some(selected.label()),
    }
}
