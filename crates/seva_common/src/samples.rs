//! Demonstration dataset.
//!
//! Three fixed applications that stay reachable when the live service does
//! not know the code. They are raw records, so they go through the same
//! normalizer as live data.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::json;

use crate::error::SevaError;
use crate::lookup::ApplicationSource;
use crate::record::RawApplicationRecord;
use crate::status::display_label;
use crate::tracking_code::TrackingCode;

pub const SAMPLE_BIRTH_CERTIFICATE: &str = "BC123456";
pub const SAMPLE_RESIDENCE_CERTIFICATE: &str = "RC789012";
pub const SAMPLE_WATER_CONNECTION: &str = "WA345678";

/// Codes served by the demonstration dataset, in display order
pub const SAMPLE_CODES: [&str; 3] = [
    SAMPLE_BIRTH_CERTIFICATE,
    SAMPLE_RESIDENCE_CERTIFICATE,
    SAMPLE_WATER_CONNECTION,
];

/// Raw record for a demonstration code, `None` for anything else.
pub fn sample_record(code: &str) -> Option<RawApplicationRecord> {
    let value = match code {
        SAMPLE_BIRTH_CERTIFICATE => json!({
            "applicationId": SAMPLE_BIRTH_CERTIFICATE,
            "type": "Birth Certificate",
            "childName": "राम कुमार शर्मा",
            "submissionDate": "2024-01-15",
            "status": "under_review",
            "paymentStatus": "paid",
            "remarks": "आपके दस्तावेज सत्यापन के लिए भेजे गए हैं। कृपया 2-3 दिन प्रतीक्षा करें।"
        }),
        SAMPLE_RESIDENCE_CERTIFICATE => json!({
            "applicationId": SAMPLE_RESIDENCE_CERTIFICATE,
            "type": "Residence Certificate",
            "applicantName": "सुनीता पाटिल",
            "submissionDate": "2024-01-10",
            "status": "approved",
            "paymentStatus": "paid",
            "fieldVerification": { "completedDate": "2024-01-15" },
            "approvalDate": "2024-01-17",
            "remarks": "आपका निवास प्रमाणपत्र तैयार है। आप इसे डाउनलोड कर सकते हैं।"
        }),
        SAMPLE_WATER_CONNECTION => json!({
            "applicationId": SAMPLE_WATER_CONNECTION,
            "type": "Water Connection",
            "ownerName": "अजय कुमार",
            "registrationDate": "2024-01-05",
            "status": "rejected",
            "paymentStatus": "paid",
            "remarks": "आवेदन अस्वीकार कर दिया गया है। कारण: अपूर्ण दस्तावेज। कृपया नए दस्तावेज के साथ पुनः आवेदन करें।"
        }),
        _ => return None,
    };
    Some(RawApplicationRecord::from_value(value))
}

/// Listing entry for the "try these codes" panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SampleSummary {
    pub code: String,
    #[serde(rename = "type")]
    pub application_type: String,
    pub status: String,
}

pub fn sample_summaries() -> Vec<SampleSummary> {
    SAMPLE_CODES
        .iter()
        .filter_map(|code| {
            let record = sample_record(code)?;
            Some(SampleSummary {
                code: code.to_string(),
                application_type: record.application_type().unwrap_or_default().to_string(),
                status: display_label(&record.status()).to_string(),
            })
        })
        .collect()
}

/// Static source backed by the demonstration dataset
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleApplicationSource;

impl SampleApplicationSource {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ApplicationSource for SampleApplicationSource {
    fn name(&self) -> &str {
        "samples"
    }

    async fn find(&self, code: &TrackingCode) -> Result<Vec<RawApplicationRecord>, SevaError> {
        Ok(sample_record(code.as_str()).into_iter().collect())
    }
}
