use anyhow::Result;

use super::{env_or, env_parse, GroqConfig, PlanGenerationConfig, YouTubeConfig};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub log_level: String,
    /// Origins allowed by the CORS layer. Empty means any origin.
    pub cors_allowed_origins: Vec<String>,
    pub groq: GroqConfig,
    pub youtube: YouTubeConfig,
    pub plan_generation: PlanGenerationConfig,
}

impl AppConfig {
    /// Create configuration from environment variables, loading `.env` first if present
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let host = env_or("HOST", "0.0.0.0");
        let port = env_parse("PORT", 8000u16)?;
        let environment = env_or("ENVIRONMENT", "development");
        let log_level = env_or("LOG_LEVEL", "info");
        let cors_allowed_origins = parse_origins(&env_or("CORS_ALLOWED_ORIGINS", ""));

        Ok(AppConfig {
            host,
            port,
            environment,
            log_level,
            cors_allowed_origins,
            groq: GroqConfig::from_env()?,
            youtube: YouTubeConfig::from_env()?,
            plan_generation: PlanGenerationConfig::from_env()?,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
