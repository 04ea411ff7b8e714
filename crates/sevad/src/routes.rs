//! API routes for sevad
//!
//! - `/v1/track` normalizes a lookup into a tracking view
//! - `/v1/samples` and `/api/track-application` expose the demonstration
//!   dataset, the latter in the upstream lookup contract
//! - `/v1/health` reports liveness

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use seva_common::{
    sample_record, sample_summaries, LookupResponse, SampleSummary, SevaError, TrackingCode,
    TrackingView,
};
use std::sync::Arc;
use tracing::{info, warn};

use crate::server::AppState;

type AppStateArc = Arc<AppState>;

/// Query string of tracking requests
#[derive(Debug, Deserialize)]
pub struct TrackQuery {
    #[serde(rename = "applicationId", default)]
    pub application_id: String,
}

/// Error body returned by every failing route
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: i32,
    pub error: String,
    pub notice: String,
}

fn error_response(status: StatusCode, err: &SevaError) -> (StatusCode, Json<ErrorBody>) {
    (
        status,
        Json(ErrorBody {
            code: err.code(),
            error: err.to_string(),
            notice: err.notice().to_string(),
        }),
    )
}

pub fn status_for(err: &SevaError) -> StatusCode {
    match err {
        SevaError::EmptyTrackingCode => StatusCode::BAD_REQUEST,
        SevaError::NotFound(_) => StatusCode::NOT_FOUND,
        SevaError::Transport(_) | SevaError::Decode(_) => StatusCode::SERVICE_UNAVAILABLE,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

// ============================================================================
// Track Routes
// ============================================================================

pub fn track_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/track", get(track))
}

async fn track(
    State(state): State<AppStateArc>,
    Query(query): Query<TrackQuery>,
) -> Result<Json<TrackingView>, (StatusCode, Json<ErrorBody>)> {
    let code = TrackingCode::parse(&query.application_id)
        .map_err(|e| error_response(status_for(&e), &e))?;

    info!("  Tracking {}", code);
    match state.lookup.track(&code).await {
        Ok(view) => Ok(Json(view)),
        Err(e) => {
            warn!("  Tracking {} failed: {}", code, e);
            Err(error_response(status_for(&e), &e))
        }
    }
}

// ============================================================================
// Sample Routes
// ============================================================================

pub fn sample_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/samples", get(list_samples))
        .route("/api/track-application", get(sample_lookup))
}

async fn list_samples() -> Json<Vec<SampleSummary>> {
    Json(sample_summaries())
}

/// Upstream lookup contract served from the demonstration dataset
async fn sample_lookup(Query(query): Query<TrackQuery>) -> Json<LookupResponse> {
    let records = TrackingCode::parse(&query.application_id)
        .ok()
        .and_then(|code| sample_record(code.as_str()))
        .into_iter()
        .collect::<Vec<_>>();

    if records.is_empty() {
        Json(LookupResponse::default())
    } else {
        Json(LookupResponse::found(records))
    }
}

// ============================================================================
// Health Routes
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}
