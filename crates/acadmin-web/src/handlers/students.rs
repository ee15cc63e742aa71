use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use acadmin_common::AdminError;
use acadmin_views::students::{self, GradeForm, StudentForm};
use acadmin_views::Redirect;

use crate::error::WebError;
use crate::handlers::view_response;
use crate::state::SharedState;

/// GET /student/{student_id}
pub async fn student_detail(
    State(state): State<SharedState>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    view_response(students::student_detail(&state.api, &student_id).await)
}

/// POST /students
pub async fn create_student(
    State(state): State<SharedState>,
    Json(form): Json<StudentForm>,
) -> Result<impl IntoResponse, WebError> {
    let redirect = students::create_student(&state.api, &form).await?;
    Ok(Json(redirect))
}

#[derive(Deserialize)]
pub struct SearchParams {
    pub student_id: String,
}

/// GET /students/search?student_id=... — pure navigation, no fetch.
pub async fn search_student(
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse, WebError> {
    let id = params.student_id.trim();
    if id.is_empty() {
        return Err(AdminError::Validation("Please enter a student number.".to_string()).into());
    }
    Ok(Json(Redirect::to(format!("/student/{id}"))))
}

/// GET /student/{student_id}/assign
pub async fn assign_module_view(
    State(state): State<SharedState>,
    Path(student_id): Path<String>,
) -> impl IntoResponse {
    view_response(students::assign_module_view(&state.api, &student_id).await)
}

#[derive(Deserialize)]
pub struct AssignForm {
    pub module: String,
}

/// POST /student/{student_id}/assign
pub async fn assign_module(
    State(state): State<SharedState>,
    Path(student_id): Path<String>,
    Json(form): Json<AssignForm>,
) -> Result<impl IntoResponse, WebError> {
    let redirect = students::assign_module(&state.api, &student_id, &form.module).await?;
    Ok(Json(redirect))
}

/// GET /student/{student_id}/grade/{module_code}
pub async fn set_grade_view(
    State(state): State<SharedState>,
    Path((student_id, module_code)): Path<(String, String)>,
) -> impl IntoResponse {
    view_response(students::set_grade_view(&state.api, &student_id, &module_code).await)
}

/// POST /student/{student_id}/grade/{module_code}
pub async fn set_grade(
    State(state): State<SharedState>,
    Path((student_id, module_code)): Path<(String, String)>,
    Json(form): Json<GradeForm>,
) -> Result<impl IntoResponse, WebError> {
    let redirect = students::set_grade(&state.api, &student_id, &module_code, &form).await?;
    Ok(Json(redirect))
}
