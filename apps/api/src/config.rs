use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every setting has a default; the service needs no secrets to run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sentence-embedding model identifier (`EMBED_MODEL`).
    pub embed_model: String,
    /// Path to the skill vocabulary file (`SKILLS_FILE`). A missing file
    /// falls back to the built-in default list.
    pub skills_file: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

pub const DEFAULT_EMBED_MODEL: &str = "all-MiniLM-L6-v2";
pub const DEFAULT_SKILLS_FILE: &str = "apps/api/data/skills_list.txt";

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            embed_model: std::env::var("EMBED_MODEL")
                .unwrap_or_else(|_| DEFAULT_EMBED_MODEL.to_string()),
            skills_file: std::env::var("SKILLS_FILE")
                .unwrap_or_else(|_| DEFAULT_SKILLS_FILE.to_string())
                .into(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
