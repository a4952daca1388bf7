use std::sync::Arc;

use anyhow::Result;
use dotenv::dotenv;
use teloxide::prelude::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod bot;
mod config;
mod error;
mod session;
mod trading;
mod wallet;
mod web;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load environment variables
    dotenv().ok();

    let config = Arc::new(Config::load()?);
    info!("Configuration loaded successfully");

    let state = Arc::new(bot::BotState::new());

    // The health endpoint runs on its own task so the hosting platform's
    // probes keep getting answered while the dispatcher below blocks.
    let web_config = config.clone();
    tokio::spawn(async move {
        if let Err(e) = web::server::start_server(web_config).await {
            error!("Health server exited: {:#}", e);
        }
    });

    let telegram_bot = Bot::new(config.telegram_bot_token.clone());

    info!("Starting ETH demo trader bot...");
    bot::commands::run_bot(telegram_bot, state).await;

    Ok(())
}
