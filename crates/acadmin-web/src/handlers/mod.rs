//! One handler module per resource, mirroring the view components.

pub mod cohorts;
pub mod degrees;
pub mod modules;
pub mod students;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use acadmin_views::ViewState;

/// Serialize a settled view state with a matching HTTP status.
pub fn view_response<T: Serialize>(state: ViewState<T>) -> Response {
    let status = match &state {
        ViewState::Loading | ViewState::Loaded { .. } => StatusCode::OK,
        ViewState::NotFound => StatusCode::NOT_FOUND,
        ViewState::Error { .. } => StatusCode::BAD_GATEWAY,
    };
    (status, Json(state)).into_response()
}
