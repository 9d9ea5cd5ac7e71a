// Whatson domain core
//
// Pure domain logic shared by the API service and the browser client:
// event DTOs, the category filter set, list filtering, date-range labels,
// email validation, and event sources feeding the sync endpoint.

pub mod category;
pub mod dates;
pub mod email;
pub mod event;
pub mod filter;
pub mod sources;

pub use category::Category;
pub use dates::{format_event_date, format_event_dates};
pub use email::is_plausible_email;
pub use event::{Event, ListResponse, ScrapeFailure, ScrapeSummary, PLACEHOLDER_IMAGE_URL};
pub use filter::filter_events;
pub use sources::{DemoSource, EventSource, ScrapedEvent, SourceSelector};
