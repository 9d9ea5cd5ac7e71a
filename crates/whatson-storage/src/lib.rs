// Postgres storage layer with sqlx
//
// This crate owns the events and email_captures tables. Queries are
// runtime-checked (query_as), migrations are embedded.

pub mod models;
pub mod repositories;

pub use models::*;
pub use repositories::Database;
