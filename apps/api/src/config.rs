use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Everything has a default so the CLI runs with zero configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the `curriculo_{lang}.json` files.
    pub data_dir: PathBuf,
    /// Directory generated documents are written to.
    pub output_dir: PathBuf,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let data_dir = PathBuf::from(env_or("CVGEN_DATA_DIR", "."));
        let output_dir = std::env::var("CVGEN_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| data_dir.clone());

        Ok(Config {
            data_dir,
            output_dir,
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
