// src/services/watsonx.rs
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{
    config::Config,
    error::AppError,
    message::{ChatReply, ChatRequest},
    services::{iam::fetch_iam_token, prompt::build_prompt},
};

pub const TEMPERATURE: f64 = 0.4;
pub const MAX_NEW_TOKENS: u32 = 300;

#[derive(Debug, Serialize)]
pub struct ChatPayload {
    pub model_id: String,
    pub messages: Vec<ChatMessage>,
    pub parameters: GenerationParameters,
}

#[derive(Debug, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct GenerationParameters {
    pub temperature: f64,
    pub max_new_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: String,
}

pub fn build_payload(model_id: &str, prompt: String) -> ChatPayload {
    ChatPayload {
        model_id: model_id.to_string(),
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
        parameters: GenerationParameters {
            temperature: TEMPERATURE,
            max_new_tokens: MAX_NEW_TOKENS,
        },
    }
}

/// POST the payload to the chat endpoint and return the first choice's text.
pub async fn send_chat(
    http: &Client,
    chat_url: &str,
    token: &str,
    payload: &ChatPayload,
) -> Result<String, AppError> {
    let response = http
        .post(chat_url)
        .bearer_auth(token)
        .json(payload)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(AppError::UpstreamInference {
            status: status.as_u16(),
            body,
        });
    }

    let completion: ChatCompletion = serde_json::from_str(&body)
        .map_err(|e| AppError::ResponseShape(format!("chat response: {e}")))?;

    completion
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| AppError::ResponseShape("chat response has no choices".to_string()))
}

/// Token exchange, prompt rendering and inference for one request.
pub async fn relay_chat(
    http: &Client,
    config: &Config,
    request: &ChatRequest,
) -> Result<ChatReply, AppError> {
    let token = fetch_iam_token(http, &config.iam_url, &config.api_key).await?;

    let prompt = build_prompt(&request.message, &request.context);
    let payload = build_payload(&config.model_id, prompt);

    let reply = send_chat(http, &config.chat_url(), &token, &payload).await?;
    tracing::info!(reply_len = reply.len(), "received model reply");

    Ok(ChatReply { reply })
}
