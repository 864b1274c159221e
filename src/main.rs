use std::sync::Arc;

use anyhow::Context;
use medai_backend::{config::Config, routes, state::AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "medai_backend=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env().context("loading configuration")?;
    tracing::info!(region = %config.region, model_id = %config.model_id, "configuration loaded");

    let addr = config.bind_addr();
    let state = Arc::new(AppState::new(config).context("building HTTP client")?);
    let app = routes::app(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;

    tracing::info!("MedAI backend running at http://{addr}");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
