use anyhow::{bail, Context, Result};

use crate::distribution::DEFAULT_MAX_PAGES;

/// Application configuration loaded from environment variables.
/// Every variable has a default; startup fails only on malformed values.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Page ceiling used when a request does not carry `maxPages`.
    pub default_max_pages: u32,
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
            default_max_pages: parse_max_pages(std::env::var("DEFAULT_MAX_PAGES").ok())?,
        })
    }
}

fn parse_max_pages(raw: Option<String>) -> Result<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_MAX_PAGES);
    };
    let value = raw
        .trim()
        .parse::<u32>()
        .with_context(|| format!("DEFAULT_MAX_PAGES must be a positive integer, got '{raw}'"))?;
    if value == 0 {
        bail!("DEFAULT_MAX_PAGES must be at least 1");
    }
    Ok(value)
}
