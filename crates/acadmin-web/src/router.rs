//! Axum router — maps all URL paths to handlers.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{cohorts, degrees, modules, students};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Degrees
        .route("/degrees", get(degrees::all_degrees).post(degrees::create_degree))
        .route("/degree/{shortcode}", get(degrees::degree_detail))

        // Cohorts
        .route("/cohorts", get(cohorts::all_cohorts).post(cohorts::create_cohort))
        .route("/cohort/{cohort_id}", get(cohorts::cohort_detail))
        .route("/cohort/{cohort_id}/modules", get(modules::modules_delivered))

        // Modules
        .route("/modules", get(modules::all_modules).post(modules::create_module))
        .route("/module/{code}", get(modules::module_detail))

        // Students and grades
        .route("/students", post(students::create_student))
        .route("/students/search", get(students::search_student))
        .route("/student/{student_id}", get(students::student_detail))
        .route(
            "/student/{student_id}/assign",
            get(students::assign_module_view).post(students::assign_module),
        )
        .route(
            "/student/{student_id}/grade/{module_code}",
            get(students::set_grade_view).post(students::set_grade),
        )

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
