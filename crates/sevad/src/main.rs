//! Seva Daemon - tracking API for service applications
//!
//! Serves normalized tracking views over HTTP and a demonstration copy of
//! the upstream lookup endpoint.

use anyhow::{Context, Result};
use seva_common::{SevaConfig, TrackingLookup};
use tracing::info;
use tracing_subscriber::EnvFilter;

use sevad::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Seva Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = SevaConfig::load();
    info!("  Lookup endpoint: {}", config.lookup.endpoint);
    if config.lookup.fallback_samples {
        info!("  Sample fallback enabled");
    }

    let lookup =
        TrackingLookup::from_settings(&config.lookup).context("Failed to set up lookup")?;

    server::run(AppState::new(lookup), &config.server.listen_addr).await?;

    info!("Seva Daemon stopped");
    Ok(())
}
