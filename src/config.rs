use std::env;

use anyhow::{Context, Result};

#[derive(Clone, Debug)]
pub struct Config {
    pub telegram_bot_token: String,
    pub http_host: String,
    pub http_port: u16,
}

impl Config {
    /// Loads configuration from the environment once at startup. A missing
    /// bot token or a malformed port is fatal.
    pub fn load() -> Result<Self> {
        Ok(Self {
            telegram_bot_token: env::var("TELEGRAM_BOT_TOKEN")
                .context("TELEGRAM_BOT_TOKEN not set in environment")?,
            http_host: env::var("HTTP_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            // Hosting platforms conventionally inject the probe port as PORT.
            http_port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .context("Failed to parse PORT as integer")?,
        })
    }
}
