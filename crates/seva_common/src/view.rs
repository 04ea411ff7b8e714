//! Presentation model for one tracked application.

use serde::{Deserialize, Serialize};

use crate::stages::StageEntry;
use crate::status::{display_label, status_icon, StatusCode};

/// Everything the tracking page renders for a single application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackingView {
    #[serde(rename = "type")]
    pub application_type: String,
    pub applicant_name: String,
    pub application_date: String,
    /// Display label, not the wire code
    pub status: String,
    pub status_color: String,
    pub bg_color: String,
    pub current_stage: String,
    pub expected_completion: String,
    pub stages: Vec<StageEntry>,
    pub remarks: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_link: Option<String>,
}

impl TrackingView {
    pub fn status_icon(&self) -> &'static str {
        status_icon(&self.status)
    }

    pub fn completed_stages(&self) -> usize {
        self.stages.iter().filter(|s| s.completed).count()
    }

    /// First step that is not yet done; a rejected application has none.
    pub fn next_stage(&self) -> Option<&StageEntry> {
        if self.status == display_label(&StatusCode::Rejected) {
            return None;
        }
        self.stages.iter().find(|s| !s.completed)
    }
}
