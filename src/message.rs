// src/message.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Inbound `/chat` body. `context` is free-form patient metadata; the keys
/// `country`, `age`, `sex` and `history` are read when present.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub context: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatReply {
    pub reply: String,
}
