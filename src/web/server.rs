//! Axum server setup for the health endpoint

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::routes::create_routes;
use crate::config::Config;

/// Binds and serves the health routes until the process exits.
pub async fn start_server(config: Arc<Config>) -> Result<()> {
    let app = create_app();

    let addr: SocketAddr = format!("{}:{}", config.http_host, config.http_port)
        .parse()
        .context("Invalid HTTP_HOST or PORT")?;

    info!("Starting health server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

/// Router without the listener, usable from tests.
pub fn create_app() -> Router {
    create_routes().layer(TraceLayer::new_for_http())
}
