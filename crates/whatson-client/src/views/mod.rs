// Presentation view-models
//
// Pure functions from controller state to the structures a renderer draws.
// Nothing here touches the network or mutates state.

mod capture_modal;
mod event_card;
mod page;

pub use capture_modal::{capture_modal, CaptureModalView};
pub use event_card::{event_card, CategoryBadge, EventCardView};
pub use page::{page, CategoryChip, HeaderView, PageBody, PageView};
