//! acadmin-client — Typed client for the external university records API.
//!
//! The API owns all business logic and persistence; this crate only maps
//! its JSON payloads onto typed records and reports failures uniformly.

pub mod api;
pub mod client;
pub mod mock;
pub mod models;

pub use api::RecordsApi;
pub use client::RecordsClient;
pub use mock::MockRecordsApi;
