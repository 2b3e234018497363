// Process configuration

pub mod app;
pub mod providers;

pub use app::AppConfig;
pub use providers::{GroqConfig, PlanGenerationConfig, YouTubeConfig};

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;

/// Read an optional variable, falling back to `default` when unset.
pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read a required variable; an unset or blank value is an error naming the key.
pub(crate) fn env_required(key: &str) -> Result<String> {
    let value = env::var(key).with_context(|| format!("{} must be set", key))?;
    if value.trim().is_empty() {
        anyhow::bail!("{} must not be empty", key);
    }
    Ok(value)
}

/// Read and parse an optional variable.
pub(crate) fn env_parse<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a valid value, got {:?}", key, raw)),
        Err(_) => Ok(default),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
