use anyhow::{Context, Result};
use shared::config::require_env;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    /// Base URL the UI server calls.
    pub api_url: String,
    /// Base URL the browser loads uploaded images from.
    pub api_public_url: String,
}

impl Config {
    pub fn init() -> Result<Self> {
        let port = require_env("PORT")?
            .parse::<u16>()
            .context("PORT must be a valid u16 integer")?;

        let api_url = require_env("API_URL")?.trim_end_matches('/').to_string();

        let api_public_url = std::env::var("API_PUBLIC_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| api_url.clone());

        Ok(Self {
            port,
            api_url,
            api_public_url,
        })
    }
}
