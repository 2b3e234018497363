use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::exercises::get_exercise_details;
use super::health::health_check;
use super::middleware::{catch_panic_layer, cors_layer, security_headers_layer};
use super::workouts::generate_workout;
use crate::services::{ExerciseVideoService, PlanGenerationService};

/// Services shared by all handlers. Holds no mutable state.
#[derive(Clone)]
pub struct AppState {
    pub plan_generation_service: PlanGenerationService,
    pub exercise_video_service: ExerciseVideoService,
}

pub fn create_routes(state: AppState, cors_allowed_origins: &[String]) -> Router {
    let api = Router::new()
        .route("/generate-workout/", post(generate_workout))
        .route("/exercise-details/", get(get_exercise_details));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state)
        .layer(catch_panic_layer())
        .layer(security_headers_layer())
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}
