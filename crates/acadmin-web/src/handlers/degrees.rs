use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use acadmin_views::degrees::{self, DegreeForm};

use crate::error::WebError;
use crate::handlers::view_response;
use crate::state::SharedState;

/// GET /degrees
pub async fn all_degrees(State(state): State<SharedState>) -> impl IntoResponse {
    view_response(degrees::all_degrees(&state.api).await)
}

/// GET /degree/{shortcode}
pub async fn degree_detail(
    State(state): State<SharedState>,
    Path(shortcode): Path<String>,
) -> impl IntoResponse {
    view_response(degrees::degree_detail(&state.api, &shortcode).await)
}

/// POST /degrees
pub async fn create_degree(
    State(state): State<SharedState>,
    Json(form): Json<DegreeForm>,
) -> Result<impl IntoResponse, WebError> {
    let redirect = degrees::create_degree(&state.api, &form).await?;
    Ok(Json(redirect))
}
