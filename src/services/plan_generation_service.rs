use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

use super::{normalize_model_output, ChatCompletion, NormalizedOutput, ProviderError, RetryPolicy};
use crate::config::PlanGenerationConfig;
use crate::models::{GeneratedWorkout, UserProfile, WorkoutPlan, REQUIRED_PLAN_KEYS};

/// Output contract given to the model, with a one-shot example of the exact shape.
pub const SYSTEM_PROMPT: &str = r#"You are an expert strength and conditioning coach. Build a detailed, personalized 4-week workout plan.

Start by reasoning step by step about the user's profile inside a <think> block.
After the closing </think> tag, output exactly one valid JSON object and nothing else.
Do not wrap the JSON in markdown code fences and do not add any text after it.

The top-level JSON object MUST contain exactly these keys: "planName", "planOverview", "progressionTips" and "weeks".

Every entry in an "exercises" array MUST be a JSON object of the form
{"name": "Exercise Name", "sets": 3, "reps": "8-12", "rest": "60s"}.
Never return an exercise as a plain string.

Example of the required structure:
{
  "planName": "Beginner Full-Body Foundation",
  "planOverview": "A 4-week plan that builds a strength base with compound movements.",
  "progressionTips": [
    "Add a small amount of weight each week while keeping good form."
  ],
  "weeks": [{
    "weekNumber": 1,
    "days": [{
      "day": "Monday",
      "focus": "Full Body A",
      "exercises": [
        {"name": "Goblet Squat", "sets": 3, "reps": "8-12", "rest": "60s"},
        {"name": "Push-ups", "sets": 3, "reps": "To Failure", "rest": "60s"}
      ]
    }]
  }]
}"#;

const USER_PROMPT_HEADER: &str = "Create a 4-week workout plan for a user with the following profile:";

/// How much of a parsed plan is checked before it is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanValidation {
    /// `planName` and `weeks` must be present.
    #[default]
    Presence,
    /// The plan must also match the typed `WorkoutPlan` shape, so every
    /// exercise is an object with `name`, `sets`, `reps` and `rest`.
    Strict,
}

/// Why a single generation attempt was rejected.
#[derive(Error, Debug)]
pub enum AttemptError {
    #[error("Completion request failed: {0}")]
    Provider(#[from] ProviderError),

    #[error("Response is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),

    #[error("Generated JSON is missing required keys: {}", .0.join(", "))]
    MissingKeys(Vec<&'static str>),

    #[error("Generated plan does not match the expected shape: {0}")]
    Shape(#[source] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum PlanGenerationError {
    #[error("Failed to generate workout plan after {attempts} attempts: {last_error}")]
    Exhausted {
        attempts: u32,
        #[source]
        last_error: AttemptError,
    },
}

/// Generates workout plans through a chat completion provider, retrying
/// until the model returns a usable plan.
#[derive(Clone)]
pub struct PlanGenerationService {
    completion: Arc<dyn ChatCompletion>,
    retry: RetryPolicy,
    validation: PlanValidation,
}

impl PlanGenerationService {
    pub fn new(completion: Arc<dyn ChatCompletion>, config: PlanGenerationConfig) -> Self {
        Self {
            completion,
            retry: config.retry,
            validation: config.validation,
        }
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry
    }

    pub fn validation(&self) -> PlanValidation {
        self.validation
    }

    /// Generate a plan for `profile`. Stops at the first accepted plan.
    pub async fn generate_plan(
        &self,
        profile: &UserProfile,
    ) -> Result<GeneratedWorkout, PlanGenerationError> {
        let user_prompt = build_user_prompt(profile);
        let user_prompt = user_prompt.as_str();
        let max_attempts = self.retry.attempts();

        self.retry
            .execute(move |attempt| self.attempt(attempt, max_attempts, user_prompt))
            .await
            .map_err(|last_error| PlanGenerationError::Exhausted {
                attempts: max_attempts,
                last_error,
            })
    }

    async fn attempt(
        &self,
        attempt: u32,
        max_attempts: u32,
        user_prompt: &str,
    ) -> Result<GeneratedWorkout, AttemptError> {
        info!("Plan generation attempt {} of {}", attempt, max_attempts);

        let raw_response = self
            .completion
            .complete(SYSTEM_PROMPT, user_prompt)
            .await
            .map_err(|e| {
                warn!("Attempt {} failed: {}", attempt, e);
                AttemptError::from(e)
            })?;

        match parse_plan(&raw_response, self.validation) {
            Ok(workout) => {
                info!("Attempt {} produced a valid plan", attempt);
                Ok(workout)
            }
            Err(e) => {
                warn!("Attempt {} failed: {}", attempt, e);
                warn!("Model's raw response was: {}", raw_response);
                Err(e)
            }
        }
    }
}

/// Render the profile as the user-facing prompt. Optional body metrics are
/// only listed when provided.
pub fn build_user_prompt(profile: &UserProfile) -> String {
    let mut lines = vec![
        format!("- Primary Goal: {}", profile.goal()),
        format!("- Fitness Level: {}", profile.fitness_level()),
        format!("- Available Equipment: {}", profile.equipment()),
        format!("- Workout Frequency: {}", profile.frequency()),
    ];

    if let Some(weight) = profile.weight() {
        lines.push(format!("- Weight: {} kg", weight));
    }
    if let Some(height) = profile.height() {
        lines.push(format!("- Height: {} cm", height));
    }
    if let Some(age) = profile.age() {
        lines.push(format!("- Age: {}", age));
    }
    if let Some(gender) = profile.gender() {
        lines.push(format!("- Gender: {}", gender));
    }

    format!("{}\n{}", USER_PROMPT_HEADER, lines.join("\n"))
}

/// Turn one raw model response into a plan, or say why it is unusable.
pub fn parse_plan(raw: &str, validation: PlanValidation) -> Result<GeneratedWorkout, AttemptError> {
    let NormalizedOutput {
        thinking,
        candidate,
    } = normalize_model_output(raw);

    let plan: Value = serde_json::from_str(&candidate).map_err(AttemptError::Parse)?;
    validate_plan(&plan, validation)?;

    Ok(GeneratedWorkout { thinking, plan })
}

pub fn validate_plan(plan: &Value, validation: PlanValidation) -> Result<(), AttemptError> {
    let missing: Vec<&'static str> = REQUIRED_PLAN_KEYS
        .iter()
        .copied()
        .filter(|key| plan.get(key).is_none())
        .collect();

    if !missing.is_empty() {
        return Err(AttemptError::MissingKeys(missing));
    }

    if validation == PlanValidation::Strict {
        WorkoutPlan::deserialize(plan).map_err(AttemptError::Shape)?;
    }

    Ok(())
}
