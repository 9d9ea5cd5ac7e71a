// Service layer between routes and storage

pub mod capture;
pub mod event;
pub mod scrape;

pub use capture::CaptureService;
pub use event::EventService;
pub use scrape::ScrapeService;
