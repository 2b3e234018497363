use axum::{
    body::{to_bytes, Body},
    extract::{FromRequest, Request, State},
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{ApiError, AppState};
use crate::models::{GeneratedWorkout, UserProfile};

/// Same ceiling as axum's default body limit.
const MAX_PROFILE_BYTES: usize = 2 * 1024 * 1024;

/// JSON profile body. An empty body is the default profile; anything else
/// must be valid JSON sent as `application/json`.
pub struct ProfileJson(pub UserProfile);

#[axum::async_trait]
impl<S> FromRequest<S> for ProfileJson
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (parts, body) = req.into_parts();
        let bytes = to_bytes(body, MAX_PROFILE_BYTES)
            .await
            .map_err(|e| ApiError::InvalidBody(e.to_string()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(ProfileJson(UserProfile::default()));
        }

        let req = Request::from_parts(parts, Body::from(bytes));
        let WithRejection(Json(profile), _) =
            WithRejection::<Json<UserProfile>, ApiError>::from_request(req, state).await?;

        Ok(ProfileJson(profile))
    }
}

/// Generate a 4-week workout plan for the submitted profile
pub async fn generate_workout(
    State(state): State<AppState>,
    ProfileJson(profile): ProfileJson,
) -> Result<Json<GeneratedWorkout>, ApiError> {
    let workout = state.plan_generation_service.generate_plan(&profile).await?;

    Ok(Json(workout))
}
