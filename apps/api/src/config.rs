use anyhow::{Context, Result};

use crate::llm_client;

/// Application configuration loaded once from environment variables and
/// carried in `AppState`.
///
/// The API key is optional: without it the service starts in fallback-only
/// mode instead of failing.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: Option<String>,
    pub gemini_model: String,
    pub host: String,
    pub port: u16,
    pub debug: bool,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let debug = matches!(
            std::env::var("DEBUG").unwrap_or_default().to_lowercase().as_str(),
            "1" | "true"
        );

        Ok(Config {
            google_api_key: optional_env("GOOGLE_API_KEY"),
            gemini_model: std::env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| llm_client::DEFAULT_MODEL.to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            debug,
            rust_log: std::env::var("RUST_LOG")
                .unwrap_or_else(|_| if debug { "debug" } else { "info" }.to_string()),
        })
    }
}

/// Reads an environment variable, treating blank values as absent.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
