use axum::{
    extract::State,
    Json,
};
use tracing::Instrument;
use uuid::Uuid;

use crate::{
    error::AppError,
    message::{ChatReply, ChatRequest},
    services::watsonx::relay_chat,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatReply>, AppError> {
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("chat", %request_id);

    async move {
        tracing::info!(
            message_len = payload.message.len(),
            context_keys = payload.context.len(),
            "relaying chat message"
        );
        let reply = relay_chat(&state.http, &state.config, &payload).await?;
        Ok::<_, AppError>(Json(reply))
    }
    .instrument(span)
    .await
}
