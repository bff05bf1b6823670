use anyhow::{Context, Result, anyhow};
use std::str::FromStr;

pub fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Missing environment variable: {key}"))
}

pub fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

pub fn env_parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        Err(_) => Ok(default),
    }
}

/// Strict `true`/`false` flag. Missing keys fall back to `default`.
pub fn env_bool(key: &str, default: bool) -> Result<bool> {
    match std::env::var(key) {
        Ok(raw) => match raw.as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            other => Err(anyhow!("{key} must be 'true' or 'false', got '{other}'")),
        },
        Err(_) => Ok(default),
    }
}
