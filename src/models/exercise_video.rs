use serde::{Deserialize, Serialize};

/// Hint lines returned alongside every tutorial video.
pub const VIDEO_INSTRUCTIONS: [&str; 2] = [
    "Please watch the video for proper form and instructions.",
    "Consult a professional if you are unsure.",
];

#[derive(Debug, Deserialize)]
pub struct ExerciseVideoQuery {
    pub name: Option<String>,
}

/// Tutorial descriptor returned by the video lookup endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseVideo {
    pub name: String,
    pub instructions: Vec<String>,
    pub video_url: String,
}

impl ExerciseVideo {
    pub fn new(name: String, video_url: String) -> Self {
        Self {
            name,
            instructions: VIDEO_INSTRUCTIONS.iter().map(|s| s.to_string()).collect(),
            video_url,
        }
    }
}

/// Parameters of a single video search call.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSearchQuery {
    pub query: String,
    pub max_results: u32,
    /// Result type filter, e.g. `video`.
    pub kind: String,
}

impl VideoSearchQuery {
    pub fn tutorial_for(exercise_name: &str) -> Self {
        Self {
            query: format!("{} exercise tutorial form", exercise_name),
            max_results: 1,
            kind: "video".to_string(),
        }
    }
}

/// One ranked search hit. Channel and playlist hits carry no video id.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoSearchItem {
    pub video_id: Option<String>,
    pub title: Option<String>,
}
