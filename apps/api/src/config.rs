use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Startup fails if required variables are missing.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub gemini_api_key: String,
    /// Speech-to-text relay the browser client is expected to use.
    pub speech_provider: String,
    /// How many questions to generate per interview session.
    pub question_count: u32,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: require_env("DATABASE_URL")?,
            gemini_api_key: require_env("GEMINI_API_KEY")?,
            speech_provider: std::env::var("SPEECH_PROVIDER")
                .unwrap_or_else(|_| "web-speech".to_string()),
            question_count: std::env::var("INTERVIEW_QUESTION_COUNT")
                .unwrap_or_else(|_| "5".to_string())
                .parse::<u32>()
                .context("INTERVIEW_QUESTION_COUNT must be a positive integer")?,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
