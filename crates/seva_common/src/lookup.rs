//! Application lookup.
//!
//! A lookup asks one or more [`ApplicationSource`]s for the records matching a
//! tracking code. Production uses [`HttpApplicationSource`] against the live
//! tracking endpoint, with the static [`SampleApplicationSource`] consulted
//! second. Tests substitute fakes through the same trait.
//!
//! [`SampleApplicationSource`]: crate::samples::SampleApplicationSource

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::LookupSettings;
use crate::error::SevaError;
use crate::normalizer::normalize;
use crate::record::RawApplicationRecord;
use crate::samples::SampleApplicationSource;
use crate::tracking_code::TrackingCode;
use crate::view::TrackingView;

/// Query parameter carrying the tracking code
pub const APPLICATION_ID_PARAM: &str = "applicationId";

// ============================================================================
// Source Trait
// ============================================================================

/// Anything that can answer "which records belong to this code"
#[async_trait]
pub trait ApplicationSource: Send + Sync {
    /// Short name used in logs and results
    fn name(&self) -> &str;

    /// All records matching `code`; an empty list is a clean miss.
    async fn find(&self, code: &TrackingCode) -> Result<Vec<RawApplicationRecord>, SevaError>;
}

/// Response envelope of the tracking endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupResponse {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<RawApplicationRecord>,
}

impl LookupResponse {
    pub fn found(data: Vec<RawApplicationRecord>) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// Records to use; an unsuccessful response counts as no match.
    pub fn into_records(self) -> Vec<RawApplicationRecord> {
        if self.success {
            self.data
        } else {
            Vec::new()
        }
    }
}

// ============================================================================
// HTTP Source (Production)
// ============================================================================

/// Live tracking endpoint
pub struct HttpApplicationSource {
    endpoint: String,
    http: reqwest::Client,
}

impl HttpApplicationSource {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SevaError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("seva-tracker/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SevaError::Transport(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            http,
        })
    }

    pub fn from_settings(settings: &LookupSettings) -> Result<Self, SevaError> {
        Self::new(settings.endpoint.clone(), settings.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ApplicationSource for HttpApplicationSource {
    fn name(&self) -> &str {
        "live"
    }

    async fn find(&self, code: &TrackingCode) -> Result<Vec<RawApplicationRecord>, SevaError> {
        debug!("Querying {} for {}", self.endpoint, code);

        let response = self
            .http
            .get(&self.endpoint)
            .query(&[(APPLICATION_ID_PARAM, code.as_str())])
            .send()
            .await
            .map_err(|e| SevaError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SevaError::Transport(format!("HTTP {}", response.status())));
        }

        let body = response
            .text()
            .await
            .map_err(|e| SevaError::Transport(e.to_string()))?;

        let envelope: LookupResponse =
            serde_json::from_str(&body).map_err(|e| SevaError::Decode(e.to_string()))?;

        Ok(envelope.into_records())
    }
}

// ============================================================================
// Lookup Policy
// ============================================================================

/// A matched record and the source that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct LookupHit {
    pub record: RawApplicationRecord,
    pub source: String,
}

/// Primary source first, then an optional lower-priority fallback.
#[derive(Clone)]
pub struct TrackingLookup {
    primary: Arc<dyn ApplicationSource>,
    fallback: Option<Arc<dyn ApplicationSource>>,
}

impl TrackingLookup {
    pub fn new(primary: Arc<dyn ApplicationSource>) -> Self {
        Self {
            primary,
            fallback: None,
        }
    }

    pub fn with_fallback(mut self, fallback: Arc<dyn ApplicationSource>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Live HTTP source, plus the sample dataset when the settings enable it.
    pub fn from_settings(settings: &LookupSettings) -> Result<Self, SevaError> {
        let lookup = Self::new(Arc::new(HttpApplicationSource::from_settings(settings)?));
        if settings.fallback_samples {
            Ok(lookup.with_fallback(Arc::new(SampleApplicationSource::new())))
        } else {
            Ok(lookup)
        }
    }

    pub fn has_fallback(&self) -> bool {
        self.fallback.is_some()
    }

    /// Find the record for `code`.
    ///
    /// Returns `NotFound` when every source misses cleanly, or the primary's
    /// transport error when the primary failed and the fallback missed.
    pub async fn find(&self, code: &TrackingCode) -> Result<LookupHit, SevaError> {
        let primary_error = match self.primary.find(code).await {
            Ok(records) => match records.into_iter().next() {
                Some(record) => {
                    info!("Found {} via {}", code, self.primary.name());
                    return Ok(LookupHit {
                        record,
                        source: self.primary.name().to_string(),
                    });
                }
                None => None,
            },
            Err(e) => {
                warn!("Lookup via {} failed for {}: {}", self.primary.name(), code, e);
                Some(e)
            }
        };

        if let Some(fallback) = &self.fallback {
            match fallback.find(code).await {
                Ok(records) => {
                    if let Some(record) = records.into_iter().next() {
                        info!("Found {} via fallback {}", code, fallback.name());
                        return Ok(LookupHit {
                            record,
                            source: fallback.name().to_string(),
                        });
                    }
                }
                Err(e) => warn!("Fallback {} failed for {}: {}", fallback.name(), code, e),
            }
        }

        Err(primary_error.unwrap_or_else(|| SevaError::NotFound(code.to_string())))
    }

    /// Look up `code` and normalize the match into a view.
    pub async fn track(&self, code: &TrackingCode) -> Result<TrackingView, SevaError> {
        let hit = self.find(code).await?;
        Ok(normalize(&hit.record, code))
    }
}
