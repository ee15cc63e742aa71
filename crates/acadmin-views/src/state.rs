//! Shared view state machine.
//!
//! Every view starts in `loading` and settles into exactly one of
//! `loaded`, `not_found`, or `error`. All three are terminal for a mount;
//! navigating to different route parameters remounts and restarts from
//! `loading`.

use serde::Serialize;
use tracing::{debug, error};

use acadmin_common::{AdminError, Result};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState<T> {
    Loading,
    Loaded { data: T },
    NotFound,
    Error { message: String },
}

impl<T> ViewState<T> {
    /// Settle a fetch-group outcome: a `NotFound` failure is a distinct
    /// non-error terminal state, anything else failing is a page-level error.
    pub fn from_result(res: Result<T>) -> Self {
        match res {
            Ok(data) => ViewState::Loaded { data },
            Err(AdminError::NotFound(what)) => {
                debug!(what = %what, "lookup completed without a match");
                ViewState::NotFound
            }
            Err(err) => {
                error!(error = %err, "view fetch failed");
                ViewState::Error {
                    message: err.to_string(),
                }
            }
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, ViewState::Loading)
    }
}

/// Navigation target returned by a successful mutation flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Redirect {
    pub to: String,
}

impl Redirect {
    pub fn to(path: impl Into<String>) -> Self {
        Self { to: path.into() }
    }
}

/// One mounted view keyed by its route parameter.
///
/// Guards against a stale response being applied after the view has
/// remounted with a different key: a commit is only accepted while the
/// machine is still `loading` and the originating key matches the current
/// mount.
///
/// The bundled HTTP shell builds every response from scratch, so it gets
/// this isolation per request and does not hold a mount. The guard is for
/// hosts that keep a view alive across navigations.
#[derive(Debug)]
pub struct ViewMount<K, T> {
    key: K,
    state: ViewState<T>,
}

impl<K: PartialEq + std::fmt::Debug, T> ViewMount<K, T> {
    pub fn new(key: K) -> Self {
        Self {
            key,
            state: ViewState::Loading,
        }
    }

    pub fn key(&self) -> &K {
        &self.key
    }

    pub fn state(&self) -> &ViewState<T> {
        &self.state
    }

    /// Restart the machine for new route parameters.
    pub fn remount(&mut self, key: K) {
        self.key = key;
        self.state = ViewState::Loading;
    }

    /// Apply a settled state for the given originating key. Returns whether
    /// the commit was accepted.
    pub fn commit(&mut self, key: &K, state: ViewState<T>) -> bool {
        if *key != self.key {
            debug!(?key, current = ?self.key, "dropping stale view commit");
            return false;
        }
        if self.state.is_terminal() {
            return false;
        }
        self.state = state;
        true
    }
}
