use axum::Json;
use axum::extract::rejection::JsonRejection;

use crate::error::AppError;
use crate::message::{MessageRequest, MessageResponse};
use crate::services::chatbot::generate_reply;

pub async fn message_handler(
    payload: Result<Json<MessageRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    // Malformed or non-JSON bodies are treated the same as a missing message.
    let Json(payload) = payload.map_err(|rej| AppError::InvalidBody(rej.body_text()))?;

    let message = payload.message.unwrap_or_default();
    if message.is_empty() {
        return Err(AppError::MissingMessage);
    }

    let reply = generate_reply(&message);
    tracing::debug!(%reply, "selected reply");

    Ok(Json(MessageResponse {
        reply: reply.to_string(),
    }))
}
