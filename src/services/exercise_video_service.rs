use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info, warn};

use super::video_search_client::embed_url;
use super::{ProviderError, VideoSearch};
use crate::models::{ExerciseVideo, VideoSearchQuery};

/// Outcome of a failed video lookup. The display text is the message shown
/// to API callers.
#[derive(Error, Debug)]
pub enum VideoLookupError {
    #[error("Exercise name not provided.")]
    MissingName,

    #[error("No video tutorial found for '{0}'.")]
    NotFound(String),

    #[error("The provided YouTube API key is invalid.")]
    InvalidCredential,

    #[error("The YouTube API quota has been exceeded.")]
    QuotaExceeded,

    #[error("An error occurred with the YouTube API.")]
    Provider { reason: Option<String> },

    #[error("An unexpected server error occurred.")]
    Unexpected(String),
}

impl From<ProviderError> for VideoLookupError {
    fn from(error: ProviderError) -> Self {
        match error {
            ProviderError::Api { reason, .. } => match reason.as_deref() {
                Some("keyInvalid") => VideoLookupError::InvalidCredential,
                Some(r) if r.contains("quotaExceeded") => VideoLookupError::QuotaExceeded,
                _ => VideoLookupError::Provider { reason },
            },
            other => VideoLookupError::Unexpected(other.to_string()),
        }
    }
}

/// Finds a tutorial video for an exercise. One search call per lookup, no retries.
#[derive(Clone)]
pub struct ExerciseVideoService {
    search: Arc<dyn VideoSearch>,
}

impl ExerciseVideoService {
    pub fn new(search: Arc<dyn VideoSearch>) -> Self {
        Self { search }
    }

    pub async fn find_tutorial(&self, name: Option<&str>) -> Result<ExerciseVideo, VideoLookupError> {
        let name = name
            .filter(|n| !n.is_empty())
            .ok_or(VideoLookupError::MissingName)?;

        let query = VideoSearchQuery::tutorial_for(name);
        let items = self.search.search(&query).await.map_err(|e| {
            match e.reason() {
                Some(reason) => warn!("YouTube API error for {:?}: {}", name, reason),
                None => error!("Video search for {:?} failed: {}", name, e),
            }
            VideoLookupError::from(e)
        })?;

        let video_id = items.into_iter().next().and_then(|item| item.video_id);

        match video_id {
            Some(id) => {
                let video_url = embed_url(&id);
                info!("Found tutorial for {:?}: {}", name, video_url);
                Ok(ExerciseVideo::new(title_case(name), video_url))
            }
            None => {
                info!("No tutorial found for {:?}", name);
                Err(VideoLookupError::NotFound(name.to_string()))
            }
        }
    }
}

/// Capitalize the first letter of every word and lowercase the rest. A word
/// starts after any non-letter, so `push-up` becomes `Push-Up`.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut previous_is_letter = false;

    for c in text.chars() {
        if previous_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        previous_is_letter = c.is_alphabetic();
    }

    result
}
