//! Event catalogs that do not live in PostgreSQL

mod json;

pub use json::JsonEventCatalog;
