//! Status normalization.
//!
//! Turns a heterogeneous backend record into a [`TrackingView`]. Pure and
//! total: absent or malformed fields fall back to fixed values instead of
//! producing errors.

use reqwest::Url;

use crate::dates::{display_date, expected_by, format_date, parse_date};
use crate::record::RawApplicationRecord;
use crate::stages::build_stage_checklist;
use crate::status::{color_token, current_stage_label, default_remarks, display_label, StatusCode};
use crate::tracking_code::TrackingCode;
use crate::view::TrackingView;

pub const COMPLETED: &str = "Completed";
pub const NOT_APPLICABLE: &str = "N/A";
/// Stands in for a date the record does not carry or that does not parse
pub const UNKNOWN_DATE: &str = "Unknown";

pub const DEFAULT_APPLICATION_TYPE: &str = "Application";
pub const DEFAULT_APPLICANT_NAME: &str = "N/A";

pub const DOWNLOAD_PATH: &str = "/download-certificate";
pub const DOWNLOAD_ID_PARAM: &str = "id";

// Links are site-relative; the host only anchors the parser
const LINK_BASE: &str = "http://localhost/";

/// When the application is expected to finish.
pub fn expected_completion(record: &RawApplicationRecord) -> String {
    match record.status() {
        StatusCode::Approved | StatusCode::CertificateReady => COMPLETED.to_string(),
        StatusCode::Rejected => NOT_APPLICABLE.to_string(),
        _ => record
            .submission_date()
            .and_then(parse_date)
            .and_then(expected_by)
            .map(format_date)
            .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
    }
}

/// Certificate download link, only offered once the application is approved.
///
/// The code is form-encoded so free-text input cannot add query parameters.
pub fn download_link_for(code: &TrackingCode, status: &StatusCode) -> Option<String> {
    if !status.is_final_approval() {
        return None;
    }
    let mut url = Url::parse(LINK_BASE).ok()?;
    url.set_path(DOWNLOAD_PATH);
    url.query_pairs_mut().append_pair(DOWNLOAD_ID_PARAM, code.as_str());
    Some(format!("{}?{}", url.path(), url.query()?))
}

pub fn normalize(record: &RawApplicationRecord, code: &TrackingCode) -> TrackingView {
    let status = record.status();
    let colors = color_token(&status);

    TrackingView {
        application_type: record
            .application_type()
            .unwrap_or(DEFAULT_APPLICATION_TYPE)
            .to_string(),
        applicant_name: record
            .applicant_name()
            .unwrap_or(DEFAULT_APPLICANT_NAME)
            .to_string(),
        application_date: display_date(record.application_date())
            .unwrap_or_else(|| UNKNOWN_DATE.to_string()),
        status: display_label(&status).to_string(),
        status_color: colors.text.to_string(),
        bg_color: colors.background.to_string(),
        current_stage: current_stage_label(&status).to_string(),
        expected_completion: expected_completion(record),
        stages: build_stage_checklist(record),
        remarks: record
            .remarks()
            .unwrap_or_else(|| default_remarks(&status))
            .to_string(),
        download_link: download_link_for(code, &status),
    }
}
