//! Application status codes and their presentation tables.
//!
//! Every table is an exhaustive `match` with an explicit arm for unknown
//! codes, so a new backend status renders with neutral defaults.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Processing state reported by the backend
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StatusCode {
    Submitted,
    UnderReview,
    FieldVerification,
    Approved,
    Rejected,
    CertificateReady,
    /// Any code the tables do not know, kept verbatim
    Unknown(String),
}

/// Text and background color classes for a status badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorToken {
    pub text: &'static str,
    pub background: &'static str,
}

impl StatusCode {
    /// All recognized codes in process order
    pub const KNOWN: [StatusCode; 6] = [
        StatusCode::Submitted,
        StatusCode::UnderReview,
        StatusCode::FieldVerification,
        StatusCode::Approved,
        StatusCode::Rejected,
        StatusCode::CertificateReady,
    ];

    pub fn from_code(code: &str) -> Self {
        match code {
            "submitted" => StatusCode::Submitted,
            "under_review" => StatusCode::UnderReview,
            "field_verification" => StatusCode::FieldVerification,
            "approved" => StatusCode::Approved,
            "rejected" => StatusCode::Rejected,
            "certificate_ready" => StatusCode::CertificateReady,
            other => StatusCode::Unknown(other.to_string()),
        }
    }

    pub fn as_code(&self) -> &str {
        match self {
            StatusCode::Submitted => "submitted",
            StatusCode::UnderReview => "under_review",
            StatusCode::FieldVerification => "field_verification",
            StatusCode::Approved => "approved",
            StatusCode::Rejected => "rejected",
            StatusCode::CertificateReady => "certificate_ready",
            StatusCode::Unknown(code) => code.as_str(),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, StatusCode::Unknown(_))
    }

    /// Approved or certificate issued: the application is done.
    pub fn is_final_approval(&self) -> bool {
        matches!(self, StatusCode::Approved | StatusCode::CertificateReady)
    }

    /// Statuses that can only be reached after the fee was accepted.
    pub fn implies_payment(&self) -> bool {
        matches!(
            self,
            StatusCode::UnderReview
                | StatusCode::FieldVerification
                | StatusCode::Approved
                | StatusCode::CertificateReady
        )
    }
}

impl From<String> for StatusCode {
    fn from(code: String) -> Self {
        StatusCode::from_code(&code)
    }
}

impl From<StatusCode> for String {
    fn from(status: StatusCode) -> Self {
        status.as_code().to_string()
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(display_label(self))
    }
}

/// Human-readable status label; unknown codes pass through unchanged.
pub fn display_label(status: &StatusCode) -> &str {
    match status {
        StatusCode::Submitted => "Submitted",
        StatusCode::UnderReview => "Under Review",
        StatusCode::FieldVerification => "Field Verification",
        StatusCode::Approved => "Approved",
        StatusCode::Rejected => "Rejected",
        StatusCode::CertificateReady => "Certificate Ready",
        StatusCode::Unknown(code) if code.trim().is_empty() => "Unknown",
        StatusCode::Unknown(code) => code.as_str(),
    }
}

pub fn color_token(status: &StatusCode) -> ColorToken {
    let (text, background) = match status {
        StatusCode::Submitted => ("text-blue-600", "bg-blue-100"),
        StatusCode::UnderReview => ("text-yellow-600", "bg-yellow-100"),
        StatusCode::FieldVerification => ("text-orange-600", "bg-orange-100"),
        StatusCode::Approved => ("text-green-600", "bg-green-100"),
        StatusCode::Rejected => ("text-red-600", "bg-red-100"),
        StatusCode::CertificateReady => ("text-green-600", "bg-green-100"),
        StatusCode::Unknown(_) => ("text-gray-600", "bg-gray-100"),
    };
    ColorToken { text, background }
}

/// Step the application is currently sitting in.
pub fn current_stage_label(status: &StatusCode) -> &'static str {
    match status {
        StatusCode::Submitted => "Application Submitted",
        StatusCode::UnderReview => "Document Verification",
        StatusCode::FieldVerification => "Field Verification",
        StatusCode::Approved => "Final Approval Completed",
        StatusCode::Rejected => "Application Rejected",
        StatusCode::CertificateReady => "Certificate Ready for Download",
        StatusCode::Unknown(_) => "Processing",
    }
}

pub fn default_remarks(status: &StatusCode) -> &'static str {
    match status {
        StatusCode::Submitted => "आपका आवेदन प्राप्त हो गया है और प्रक्रिया शुरू की गई है।",
        StatusCode::UnderReview => {
            "आपके दस्तावेज सत्यापन के लिए भेजे गए हैं। कृपया 2-3 दिन प्रतीक्षा करें।"
        }
        StatusCode::FieldVerification => {
            "फील्ड वेरिफिकेशन का काम चल रहा है। जल्द ही पूरा हो जाएगा।"
        }
        StatusCode::Approved => {
            "आपका आवेदन स्वीकृत हो गया है। प्रमाणपत्र तैयार किया जा रहा है।"
        }
        StatusCode::Rejected => "आवेदन अस्वीकार कर दिया गया है। कृपया विवरण के लिए संपर्क करें।",
        StatusCode::CertificateReady => "आपका प्रमाणपत्र तैयार है। आप इसे डाउनलोड कर सकते हैं।",
        StatusCode::Unknown(_) => "आपके आवेदन की समीक्षा की जा रही है।",
    }
}

/// Badge icon keyed on the display label.
pub fn status_icon(label: &str) -> &'static str {
    match label {
        "Under Review" => "🔍",
        "Approved" => "✅",
        "Rejected" => "❌",
        _ => "📋",
    }
}
