//! HTTP server for sevad

use anyhow::{Context, Result};
use axum::Router;
use seva_common::TrackingLookup;
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes;

/// Application state shared across handlers
pub struct AppState {
    pub lookup: TrackingLookup,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(lookup: TrackingLookup) -> Self {
        Self {
            lookup,
            start_time: Instant::now(),
        }
    }
}

/// Full router with every route group mounted
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes::track_routes())
        .merge(routes::sample_routes())
        .merge(routes::health_routes())
        .with_state(Arc::new(state))
        .layer(TraceLayer::new_for_http())
}

/// Run the HTTP server
pub async fn run(state: AppState, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("  Listening on http://{}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down gracefully");
    }
}
