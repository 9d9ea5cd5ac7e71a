// Whatson browser client
//
// Rust rendition of the single-page client: an explicit state controller
// (EventBrowser) over an EventsBackend, the email-capture flow backing the
// ticket modal, and pure view-models the presentation layer reads.

pub mod backend;
pub mod capture;
pub mod controller;
pub mod views;

pub use backend::{BackendError, EventsBackend, HttpBackend};
pub use capture::CaptureForm;
pub use controller::EventBrowser;
