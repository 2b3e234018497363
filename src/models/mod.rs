// Request and response payloads

pub mod exercise_video;
pub mod user_profile;
pub mod workout_plan;

pub use exercise_video::*;
pub use user_profile::*;
pub use workout_plan::*;
