use anyhow::Result;
use std::time::Duration;

use super::{env_or, env_parse, env_required, parse_bool};
use crate::services::{PlanValidation, RetryPolicy};

/// Groq chat completion settings
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl GroqConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env_required("GROQ_API_KEY")?,
            base_url: env_or("GROQ_BASE_URL", "https://api.groq.com/openai/v1"),
            model: env_or("GROQ_MODEL", "qwen/qwen3-32b"),
            timeout: Duration::from_secs(env_parse("GROQ_TIMEOUT_SECS", 120u64)?),
        })
    }
}

impl std::fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// YouTube Data API settings
#[derive(Clone)]
pub struct YouTubeConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl YouTubeConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            api_key: env_required("YOUTUBE_API_KEY")?,
            base_url: env_or("YOUTUBE_BASE_URL", "https://www.googleapis.com/youtube/v3"),
            timeout: Duration::from_secs(env_parse("YOUTUBE_TIMEOUT_SECS", 30u64)?),
        })
    }
}

impl std::fmt::Debug for YouTubeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("YouTubeConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Retry and validation settings for plan generation
#[derive(Debug, Clone)]
pub struct PlanGenerationConfig {
    pub retry: RetryPolicy,
    pub validation: PlanValidation,
}

impl PlanGenerationConfig {
    pub fn from_env() -> Result<Self> {
        let max_attempts = env_parse("PLAN_MAX_ATTEMPTS", 3u32)?;
        let delay = Duration::from_millis(env_parse("PLAN_RETRY_DELAY_MS", 1000u64)?);

        let strict = match std::env::var("PLAN_STRICT_VALIDATION") {
            Ok(raw) => parse_bool(&raw).ok_or_else(|| {
                anyhow::anyhow!("PLAN_STRICT_VALIDATION must be a boolean, got {:?}", raw)
            })?,
            Err(_) => false,
        };

        Ok(Self {
            retry: RetryPolicy::fixed(max_attempts, delay),
            validation: if strict {
                PlanValidation::Strict
            } else {
                PlanValidation::Presence
            },
        })
    }
}

impl Default for PlanGenerationConfig {
    fn default() -> Self {
        Self {
            retry: RetryPolicy::default(),
            validation: PlanValidation::Presence,
        }
    }
}
