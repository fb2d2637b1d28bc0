//! HTTP server initialization and runtime setup.
//!
//! Handles draft store selection and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::DraftStore;
use crate::infrastructure::draft_store::{MemoryDraftStore, RedisDraftStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Picks the draft store backend for `config`.
///
/// Falls back to [`MemoryDraftStore`] when Redis is not configured or the
/// connection fails at startup.
pub async fn build_draft_store(config: &Config) -> Arc<dyn DraftStore> {
    let Some(redis_url) = &config.redis_url else {
        tracing::info!("Draft store: in-memory (Redis not configured)");
        return Arc::new(MemoryDraftStore::new(config.draft_ttl_seconds));
    };

    match RedisDraftStore::connect(redis_url, config.draft_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Draft store: Redis");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using in-memory draft store.", e);
            Arc::new(MemoryDraftStore::fallback(config.draft_ttl_seconds))
        }
    }
}

/// Runs the HTTP server with the given configuration until Ctrl-C.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address is invalid
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_draft_store(&config).await;
    let state = AppState::new(store, config.preview_view_modes.clone());

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
