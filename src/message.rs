// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct MessageRequest {
    pub message: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct MessageResponse {
    pub reply: String,
}
