use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use acadmin_views::modules::{self, ModuleForm};

use crate::error::WebError;
use crate::handlers::view_response;
use crate::state::SharedState;

/// GET /modules
pub async fn all_modules(State(state): State<SharedState>) -> impl IntoResponse {
    view_response(modules::all_modules(&state.api).await)
}

/// GET /module/{code}
pub async fn module_detail(
    State(state): State<SharedState>,
    Path(code): Path<String>,
) -> impl IntoResponse {
    view_response(modules::module_detail(&state.api, &code).await)
}

/// GET /cohort/{cohort_id}/modules
pub async fn modules_delivered(
    State(state): State<SharedState>,
    Path(cohort_id): Path<String>,
) -> impl IntoResponse {
    view_response(modules::modules_delivered(&state.api, &cohort_id).await)
}

/// POST /modules
pub async fn create_module(
    State(state): State<SharedState>,
    Json(form): Json<ModuleForm>,
) -> Result<impl IntoResponse, WebError> {
    let redirect = modules::create_module(&state.api, &form).await?;
    Ok(Json(redirect))
}
