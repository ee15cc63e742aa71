//! acadmin-common — Shared error type and hyperlink handling used across all acadmin crates.

pub mod error;
pub mod hyperlink;

pub use error::{AdminError, Result};
pub use hyperlink::{reference, resolve_reference};
