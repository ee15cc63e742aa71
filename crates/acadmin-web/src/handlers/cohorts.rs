use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use acadmin_views::cohorts::{self, CohortForm};

use crate::error::WebError;
use crate::handlers::view_response;
use crate::state::SharedState;

/// GET /cohorts
pub async fn all_cohorts(State(state): State<SharedState>) -> impl IntoResponse {
    view_response(cohorts::all_cohorts(&state.api).await)
}

/// GET /cohort/{cohort_id}
pub async fn cohort_detail(
    State(state): State<SharedState>,
    Path(cohort_id): Path<String>,
) -> impl IntoResponse {
    view_response(cohorts::cohort_detail(&state.api, &cohort_id).await)
}

/// POST /cohorts
pub async fn create_cohort(
    State(state): State<SharedState>,
    Json(form): Json<CohortForm>,
) -> Result<impl IntoResponse, WebError> {
    let redirect = cohorts::create_cohort(&state.api, &form).await?;
    Ok(Json(redirect))
}
