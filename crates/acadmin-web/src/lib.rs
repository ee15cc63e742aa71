//! acadmin-web — Thin HTTP shell over the view components.
//!
//! Routing glue only: each handler runs one view and serializes its
//! settled state (or the mutation outcome) to JSON.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
