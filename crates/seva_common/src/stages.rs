//! Progress timeline for an application.

use serde::{Deserialize, Serialize};

use crate::dates::display_date;
use crate::record::RawApplicationRecord;
use crate::status::StatusCode;

pub const STAGE_SUBMITTED: &str = "Application Submitted";
pub const STAGE_PAYMENT: &str = "Payment Verified";
pub const STAGE_FIELD_VERIFICATION: &str = "Field Verification";
pub const STAGE_DOCUMENTS: &str = "Document Verification";
pub const STAGE_FINAL_APPROVAL: &str = "Final Approval";
pub const STAGE_CERTIFICATE: &str = "Certificate Ready";

/// Position of the field verification step for residence certificates
pub const FIELD_VERIFICATION_INDEX: usize = 2;

/// One step of the processing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageEntry {
    pub name: String,
    pub completed: bool,
    /// `YYYY-MM-DD`, empty when the step has no known date
    pub date: String,
}

impl StageEntry {
    pub fn new(name: &str, completed: bool, date: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            completed,
            date: date.unwrap_or_default(),
        }
    }
}

/// Ordered checklist for a record.
///
/// Later steps are only marked done when every earlier step is done too.
pub fn build_stage_checklist(record: &RawApplicationRecord) -> Vec<StageEntry> {
    let status = record.status();
    let approved = status.is_final_approval();

    let mut stages = vec![
        StageEntry::new(STAGE_SUBMITTED, true, display_date(record.submission_date())),
        StageEntry::new(
            STAGE_PAYMENT,
            record.is_paid() || status.implies_payment(),
            None,
        ),
        StageEntry::new(STAGE_DOCUMENTS, approved, None),
        StageEntry::new(
            STAGE_FINAL_APPROVAL,
            approved,
            display_date(record.approval_date()),
        ),
        StageEntry::new(
            STAGE_CERTIFICATE,
            status == StatusCode::CertificateReady,
            None,
        ),
    ];

    if record.is_residence_certificate() {
        stages.insert(
            FIELD_VERIFICATION_INDEX,
            StageEntry::new(
                STAGE_FIELD_VERIFICATION,
                approved,
                display_date(record.field_verification_date()),
            ),
        );
    }

    stages
}

/// True when no completed step follows an incomplete one.
pub fn is_monotonic(stages: &[StageEntry]) -> bool {
    stages
        .windows(2)
        .all(|pair| pair[0].completed || !pair[1].completed)
}
