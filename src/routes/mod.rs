// src/routes/mod.rs
pub mod chat;

use crate::state::SharedState;
use axum::{
    Router,
    routing::{get, post},
};
use chat::chat_handler;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub fn create_router() -> Router<SharedState> {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
}

/// Full application: API routes, the optional frontend from `static_dir`, permissive CORS.
pub fn app(state: SharedState) -> Router {
    let mut router = create_router();
    if let Some(dir) = &state.config.static_dir {
        tracing::info!(dir = %dir.display(), "serving frontend");
        router = router.fallback_service(ServeDir::new(dir));
    }
    router.with_state(state).layer(CorsLayer::very_permissive())
}
