// src/error.rs
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::message::MessageResponse;
use crate::services::chatbot::NO_MESSAGE_REPLY;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("message field absent or empty")]
    MissingMessage,

    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

// Both variants surface the same contract to the caller: 400 with the
// no-message reply. The distinction only matters for logging.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::InvalidBody(reason) = &self {
            tracing::warn!(%reason, "rejected request body");
        }

        let body = Json(MessageResponse {
            reply: NO_MESSAGE_REPLY.to_string(),
        });
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
