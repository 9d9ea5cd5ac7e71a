// Page view-model
//
// Assembles the whole listing page from controller state: header, search
// box, category chips, and the body (spinner, empty state, or event grid).

use whatson_core::Category;

use crate::controller::EventBrowser;
use crate::backend::EventsBackend;

use super::event_card::{event_card, EventCardView};

#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    pub header: HeaderView,
    pub search_query: String,
    pub search_placeholder: &'static str,
    pub category_chips: Vec<CategoryChip>,
    pub body: PageBody,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderView {
    pub title: &'static str,
    pub location: &'static str,
    pub refresh_label: &'static str,
    pub refresh_disabled: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryChip {
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PageBody {
    Loading,
    Empty { heading: &'static str, message: &'static str },
    Results { summary: String, cards: Vec<EventCardView> },
}

pub fn page<B: EventsBackend>(browser: &EventBrowser<B>) -> PageView {
    let refreshing = browser.is_refreshing();

    let body = if browser.is_loading() {
        PageBody::Loading
    } else {
        let filtered = browser.filtered_events();
        if filtered.is_empty() {
            let filters_active = !browser.search_query().is_empty()
                || browser.selected_category() != Category::All;
            PageBody::Empty {
                heading: "No events found",
                message: if filters_active {
                    "Try adjusting your filters or search query"
                } else {
                    "Check back soon for upcoming events"
                },
            }
        } else {
            PageBody::Results {
                summary: event_count_summary(filtered.len()),
                cards: filtered.iter().map(event_card).collect(),
            }
        }
    };

    PageView {
        header: HeaderView {
            title: "Sydney Events",
            location: "Sydney, Australia",
            refresh_label: if refreshing { "Refreshing..." } else { "Refresh Events" },
            refresh_disabled: refreshing,
        },
        search_query: browser.search_query().to_string(),
        search_placeholder: "Search events, venues, or keywords...",
        category_chips: Category::ALL
            .iter()
            .map(|category| CategoryChip {
                label: category.label(),
                active: *category == browser.selected_category(),
            })
            .collect(),
        body,
        footer: "Discover the best events happening in Sydney",
    }
}

fn event_count_summary(count: usize) -> String {
    if count == 1 {
        "Showing 1 event".to_string()
    } else {
        format!("Showing {count} events")
    }
}
