//! Maps view-layer failures onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use acadmin_common::AdminError;

/// Mutation failure leaving the shell: upstream API verdicts keep their
/// status and detail body, local validation is a 400, everything else is
/// a 500.
#[derive(Debug)]
pub struct WebError(pub AdminError);

impl From<AdminError> for WebError {
    fn from(err: AdminError) -> Self {
        Self(err)
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self.0 {
            AdminError::Api {
                status,
                status_text,
                detail,
            } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                format!("{status} {status_text}"),
                detail,
            ),
            AdminError::Validation(message) => {
                (StatusCode::BAD_REQUEST, message, serde_json::Value::Null)
            }
            AdminError::NotFound(what) => (
                StatusCode::NOT_FOUND,
                format!("{what} not found"),
                serde_json::Value::Null,
            ),
            other => (
                StatusCode::INTERNAL_SERVER_ERROR,
                other.to_string(),
                serde_json::Value::Null,
            ),
        };
        (status, Json(json!({ "error": message, "detail": detail }))).into_response()
    }
}
