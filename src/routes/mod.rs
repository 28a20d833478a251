// src/routes/mod.rs
pub mod message;

use axum::{
    Router,
    routing::{get, post},
};
use message::message_handler;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router {
    Router::new()
        .route("/api/message", post(message_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}
