//! Error types for the Seva tracker.

use thiserror::Error;

/// Prompt shown when the tracking code field is left empty.
pub const NOTICE_EMPTY_CODE: &str = "कृपया आवेदन संख्या दर्ज करें।";

/// Shown when neither the live service nor the fallback dataset knows the code.
pub const NOTICE_NOT_FOUND: &str = "आवेदन नंबर नहीं मिला। कृपया सही नंबर डालें।";

/// Shown when the live lookup failed and the fallback dataset had no match.
pub const NOTICE_LOOKUP_FAILED: &str = "आवेदन खोजने में त्रुटि हुई। कृपया पुनः प्रयास करें।";

#[derive(Error, Debug)]
pub enum SevaError {
    #[error("Tracking code is empty")]
    EmptyTrackingCode,

    #[error("Application {0} not found")]
    NotFound(String),

    #[error("Lookup transport error: {0}")]
    Transport(String),

    #[error("Lookup response could not be decoded: {0}")]
    Decode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SevaError {
    pub fn code(&self) -> i32 {
        match self {
            SevaError::EmptyTrackingCode => -32010,
            SevaError::NotFound(_) => -32011,
            SevaError::Transport(_) => -32012,
            SevaError::Decode(_) => -32013,
            SevaError::Config(_) => -32014,
            SevaError::Io(_) => -32006,
        }
    }

    /// Citizen-facing message for this failure.
    pub fn notice(&self) -> &'static str {
        match self {
            SevaError::EmptyTrackingCode => NOTICE_EMPTY_CODE,
            SevaError::NotFound(_) => NOTICE_NOT_FOUND,
            _ => NOTICE_LOOKUP_FAILED,
        }
    }

    /// True for failures of the lookup call itself rather than a clean miss.
    pub fn is_transport(&self) -> bool {
        matches!(self, SevaError::Transport(_) | SevaError::Decode(_))
    }
}
