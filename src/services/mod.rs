// Business logic services and external provider clients

pub mod completion_client;
pub mod exercise_video_service;
pub mod plan_generation_service;
pub mod provider_error;
pub mod response_normalizer;
pub mod retry;
pub mod video_search_client;

pub use completion_client::{ChatCompletion, GroqClient};
pub use exercise_video_service::{ExerciseVideoService, VideoLookupError};
pub use plan_generation_service::{
    AttemptError, PlanGenerationError, PlanGenerationService, PlanValidation,
};
pub use provider_error::ProviderError;
pub use response_normalizer::{normalize_model_output, NormalizedOutput};
pub use retry::RetryPolicy;
pub use video_search_client::{VideoSearch, YouTubeClient};
