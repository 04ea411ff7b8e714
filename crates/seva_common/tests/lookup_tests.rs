//! Tests for the lookup fallback policy and the HTTP source.
//!
//! Fake sources stand in for the live service; the HTTP source is checked
//! against a local axum stub bound to an ephemeral port.

use async_trait::async_trait;
use axum::{extract::Query, http::StatusCode as HttpStatus, routing::get, Json, Router};
use serde_json::{json, Value};
use seva_common::{
    ApplicationSource, HttpApplicationSource, LookupResponse, RawApplicationRecord,
    SampleApplicationSource, SevaError, TrackingCode, TrackingLookup,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

// ============================================================================
// Fake sources
// ============================================================================

enum FakeBehavior {
    Records(Vec<RawApplicationRecord>),
    Fail,
}

struct FakeSource {
    behavior: FakeBehavior,
    calls: AtomicUsize,
}

impl FakeSource {
    fn empty() -> Arc<Self> {
        Self::with(FakeBehavior::Records(Vec::new()))
    }

    fn failing() -> Arc<Self> {
        Self::with(FakeBehavior::Fail)
    }

    fn returning(values: Vec<Value>) -> Arc<Self> {
        Self::with(FakeBehavior::Records(
            values
                .into_iter()
                .map(RawApplicationRecord::from_value)
                .collect(),
        ))
    }

    fn with(behavior: FakeBehavior) -> Arc<Self> {
        Arc::new(Self {
            behavior,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ApplicationSource for FakeSource {
    fn name(&self) -> &str {
        "fake"
    }

    async fn find(&self, _code: &TrackingCode) -> Result<Vec<RawApplicationRecord>, SevaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.behavior {
            FakeBehavior::Records(records) => Ok(records.clone()),
            FakeBehavior::Fail => Err(SevaError::Transport("connection refused".to_string())),
        }
    }
}

fn code(s: &str) -> TrackingCode {
    TrackingCode::parse(s).unwrap()
}

// ============================================================================
// Fallback policy
// ============================================================================

#[tokio::test]
async fn test_primary_match_wins() {
    let primary = FakeSource::returning(vec![
        json!({ "type": "Birth Certificate", "status": "approved" }),
        json!({ "type": "Ignored", "status": "rejected" }),
    ]);
    let fallback = FakeSource::empty();
    let lookup = TrackingLookup::new(primary.clone()).with_fallback(fallback.clone());

    let hit = lookup.find(&code("BC123456")).await.unwrap();
    assert_eq!(hit.record.application_type(), Some("Birth Certificate"));
    assert_eq!(hit.source, "fake");
    assert_eq!(fallback.calls(), 0);
}

#[tokio::test]
async fn test_sample_fallback_when_live_misses() {
    let lookup = TrackingLookup::new(FakeSource::empty())
        .with_fallback(Arc::new(SampleApplicationSource::new()));

    let hit = lookup.find(&code("BC123456")).await.unwrap();
    assert_eq!(hit.source, "samples");

    let view = lookup.track(&code("bc123456")).await.unwrap();
    assert_eq!(view.application_type, "Birth Certificate");
    assert_eq!(view.status, "Under Review");
    assert_eq!(view.applicant_name, "राम कुमार शर्मा");
    assert_eq!(view.expected_completion, "2024-01-30");
}

#[tokio::test]
async fn test_sample_fallback_when_live_fails() {
    let lookup = TrackingLookup::new(FakeSource::failing())
        .with_fallback(Arc::new(SampleApplicationSource::new()));

    let view = lookup.track(&code("RC789012")).await.unwrap();
    assert_eq!(view.application_type, "Residence Certificate");
    assert_eq!(view.status, "Approved");
    assert_eq!(view.stages.len(), 6);
    assert_eq!(view.stages[2].date, "2024-01-15");
    assert_eq!(
        view.download_link.as_deref(),
        Some("/download-certificate?id=RC789012")
    );
}

#[tokio::test]
async fn test_unknown_code_is_not_found() {
    let lookup = TrackingLookup::new(FakeSource::empty())
        .with_fallback(Arc::new(SampleApplicationSource::new()));

    let err = lookup.track(&code("ZZ999999")).await.unwrap_err();
    assert!(matches!(err, SevaError::NotFound(ref c) if c == "ZZ999999"));
}

#[tokio::test]
async fn test_transport_failure_surfaces_when_fallback_misses() {
    let lookup = TrackingLookup::new(FakeSource::failing())
        .with_fallback(Arc::new(SampleApplicationSource::new()));

    let err = lookup.find(&code("ZZ999999")).await.unwrap_err();
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_no_fallback_configured() {
    let lookup = TrackingLookup::new(FakeSource::empty());
    let err = lookup.find(&code("BC123456")).await.unwrap_err();
    assert!(matches!(err, SevaError::NotFound(_)));
}

#[tokio::test]
async fn test_rejected_sample() {
    let lookup = TrackingLookup::new(FakeSource::empty())
        .with_fallback(Arc::new(SampleApplicationSource::new()));

    let view = lookup.track(&code("WA345678")).await.unwrap();
    assert_eq!(view.status, "Rejected");
    assert_eq!(view.expected_completion, "N/A");
    assert_eq!(view.download_link, None);
    assert_eq!(view.stages[0].date, "2024-01-05");
}

// ============================================================================
// HTTP source against a local stub
// ============================================================================

async fn stub_handler(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
    match params.get("applicationId").map(String::as_str) {
        Some("LIVE0001") => Json(json!({
            "success": true,
            "data": [{
                "type": "Electricity Connection",
                "applicantName": "Kiran Rao",
                "applicationDate": "2024-05-02T08:15:00Z",
                "submissionDate": "2024-05-02T08:15:00Z",
                "status": "field_verification",
                "paymentStatus": "paid"
            }]
        })),
        Some("MIXED001") => Json(json!({
            "success": true,
            "data": [
                { "type": "Birth Certificate", "childName": "Meera", "status": "approved" },
                null,
                "stray"
            ]
        })),
        Some("DENIED01") => Json(json!({ "success": false, "data": [] })),
        _ => Json(json!({ "success": true, "data": [] })),
    }
}

async fn spawn_stub() -> String {
    let app = Router::new()
        .route("/api/track-application", get(stub_handler))
        .route(
            "/api/broken",
            get(|| async { (HttpStatus::INTERNAL_SERVER_ERROR, "boom") }),
        )
        .route("/api/garbage", get(|| async { "<html>not json</html>" }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn http_source(base: &str, path: &str) -> HttpApplicationSource {
    HttpApplicationSource::new(format!("{}{}", base, path), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_http_source_decodes_envelope() {
    let base = spawn_stub().await;
    let source = http_source(&base, "/api/track-application");

    let records = source.find(&code("live0001")).await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].applicant_name(), Some("Kiran Rao"));

    let view = TrackingLookup::new(Arc::new(source))
        .track(&code("LIVE0001"))
        .await
        .unwrap();
    assert_eq!(view.status, "Field Verification");
    assert_eq!(view.application_date, "2024-05-02");
    assert_eq!(view.expected_completion, "2024-05-17");
}

#[tokio::test]
async fn test_http_source_tolerates_malformed_trailing_records() {
    let base = spawn_stub().await;
    let source = http_source(&base, "/api/track-application");

    let records = source.find(&code("MIXED001")).await.unwrap();
    assert_eq!(records.len(), 3);

    let view = TrackingLookup::new(Arc::new(source))
        .with_fallback(Arc::new(SampleApplicationSource::new()))
        .track(&code("MIXED001"))
        .await
        .unwrap();
    assert_eq!(view.applicant_name, "Meera");
    assert_eq!(view.status, "Approved");
    assert_eq!(
        view.download_link.as_deref(),
        Some("/download-certificate?id=MIXED001")
    );
}

#[tokio::test]
async fn test_http_source_unsuccessful_is_miss() {
    let base = spawn_stub().await;
    let source = http_source(&base, "/api/track-application");

    assert!(source.find(&code("DENIED01")).await.unwrap().is_empty());
    assert!(source.find(&code("NOPE")).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_http_source_server_error_is_transport() {
    let base = spawn_stub().await;
    let err = http_source(&base, "/api/broken")
        .find(&code("LIVE0001"))
        .await
        .unwrap_err();
    assert!(matches!(err, SevaError::Transport(_)));
}

#[tokio::test]
async fn test_http_source_bad_body_is_decode_error() {
    let base = spawn_stub().await;
    let err = http_source(&base, "/api/garbage")
        .find(&code("LIVE0001"))
        .await
        .unwrap_err();
    assert!(matches!(err, SevaError::Decode(_)));
}

#[tokio::test]
async fn test_http_source_unreachable_falls_back_to_samples() {
    // Bind then drop to get a port with nothing listening
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let source = HttpApplicationSource::new(
        format!("http://{}/api/track-application", addr),
        Duration::from_secs(2),
    )
    .unwrap();
    let lookup =
        TrackingLookup::new(Arc::new(source)).with_fallback(Arc::new(SampleApplicationSource::new()));

    let view = lookup.track(&code("BC123456")).await.unwrap();
    assert_eq!(view.status, "Under Review");
}

#[test]
fn test_lookup_response_serializes_upstream_shape() {
    let response = LookupResponse::found(vec![RawApplicationRecord::from_value(
        json!({ "status": "submitted" }),
    )]);
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"][0]["status"], "submitted");
}
