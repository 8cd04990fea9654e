use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values abort startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Upper bound on request bodies. Answer sets are a few kilobytes.
    pub max_body_bytes: usize,
    /// Optional JSON file with extra clichés, generic phrases, and indicators.
    pub patterns_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            max_body_bytes: std::env::var("MAX_BODY_BYTES")
                .unwrap_or_else(|_| "65536".to_string())
                .parse::<usize>()
                .context("MAX_BODY_BYTES must be a positive integer")?,
            patterns_file: std::env::var("PATTERNS_FILE")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}
