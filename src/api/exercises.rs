use axum::{
    extract::{Query, State},
    response::Json,
};
use axum_extra::extract::WithRejection;

use super::{ApiError, AppState};
use crate::models::{ExerciseVideo, ExerciseVideoQuery};

/// Look up a tutorial video for `?name=<exercise>`
pub async fn get_exercise_details(
    State(state): State<AppState>,
    WithRejection(Query(query), _): WithRejection<Query<ExerciseVideoQuery>, ApiError>,
) -> Result<Json<ExerciseVideo>, ApiError> {
    let video = state
        .exercise_video_service
        .find_tutorial(query.name.as_deref())
        .await?;

    Ok(Json(video))
}
