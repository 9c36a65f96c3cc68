pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::capture::handlers as capture;
use crate::interviews::handlers as interviews;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Dashboard API
        .route(
            "/api/v1/interviews",
            get(interviews::handle_list_interviews).post(interviews::handle_create_interview),
        )
        .route(
            "/api/v1/interviews/:id",
            get(interviews::handle_get_interview),
        )
        // Capture API
        .route(
            "/api/v1/interviews/:id/questions/:q/capture",
            get(capture::handle_capture_status),
        )
        .route(
            "/api/v1/interviews/:id/questions/:q/capture/toggle",
            post(capture::handle_toggle_capture),
        )
        .route(
            "/api/v1/interviews/:id/questions/:q/capture/fragments",
            post(capture::handle_push_fragment),
        )
        .with_state(state)
}
