//! acadmin-views — View components over the records API.
//!
//! Each view gathers its data through the [`acadmin_client::RecordsApi`]
//! trait, resolves hyperlink references for display, and settles into a
//! terminal [`state::ViewState`]. Mutation flows validate form input, POST,
//! and hand back the navigation target. Routing and markup stay out of this
//! crate; the web shell maps paths to these functions.

pub mod aggregate;
pub mod cohorts;
pub mod degrees;
pub mod forms;
pub mod modules;
pub mod state;
pub mod students;

pub use state::{Redirect, ViewMount, ViewState};
