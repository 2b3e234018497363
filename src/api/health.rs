use axum::{extract::State, http::StatusCode, response::Json};
use serde_json::{json, Value};

use super::AppState;
use crate::services::PlanValidation;

/// Liveness plus the plan generation settings in effect. Providers are not
/// called, so this stays cheap and never spends API quota.
pub async fn health_check(State(state): State<AppState>) -> Result<Json<Value>, StatusCode> {
    let plans = &state.plan_generation_service;
    let validation = match plans.validation() {
        PlanValidation::Presence => "presence",
        PlanValidation::Strict => "strict",
    };

    Ok(Json(json!({
        "status": "healthy",
        "service": "workout-planner",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "planGeneration": {
            "maxAttempts": plans.retry_policy().attempts(),
            "retryDelayMs": plans.retry_policy().initial_delay.as_millis() as u64,
            "validation": validation
        }
    })))
}
