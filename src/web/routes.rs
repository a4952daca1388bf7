//! HTTP route definitions

use axum::{routing::get, Router};

use super::handlers;

pub fn create_routes() -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
}
