// Event card view-model

use whatson_core::{format_event_dates, Category, Event};

const DESCRIPTION_LIMIT: usize = 180;

/// One card in the event grid.
#[derive(Debug, Clone, PartialEq)]
pub struct EventCardView {
    pub image_url: String,
    pub badge: Option<CategoryBadge>,
    pub title: String,
    pub description: String,
    pub date_label: String,
    pub venue: String,
    pub price: Option<String>,
    pub cta_label: &'static str,
}

/// Category pill drawn over the card image.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBadge {
    pub label: String,
    pub color: &'static str,
}

pub fn event_card(event: &Event) -> EventCardView {
    EventCardView {
        image_url: event.display_image_url().to_string(),
        badge: event.category.as_deref().map(|label| CategoryBadge {
            label: label.to_string(),
            color: Category::badge_color(Some(label)),
        }),
        title: event.title.clone(),
        description: truncate(&event.description, DESCRIPTION_LIMIT),
        date_label: format_event_dates(event.event_date, event.event_end_date),
        venue: event.venue.clone(),
        price: event.price.clone(),
        cta_label: "GET TICKETS",
    }
}

/// Shorten long descriptions on a char boundary and mark the cut.
fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let cut: String = text.chars().take(limit).collect();
    format!("{}...", cut.trim_end())
}
