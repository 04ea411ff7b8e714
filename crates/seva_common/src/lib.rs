//! Shared types and logic for the Seva application tracker.
//!
//! A citizen enters the receipt number of a service request (birth
//! certificate, residence certificate, utility connection, ...). The lookup
//! service returns a raw record whose shape depends on the service type; the
//! normalizer maps it onto one [`TrackingView`] with status label, colors,
//! stage checklist, remarks and expected completion date.

pub mod config;
pub mod dates;
pub mod error;
pub mod lookup;
pub mod normalizer;
pub mod record;
pub mod samples;
pub mod stages;
pub mod status;
pub mod tracking_code;
pub mod view;

pub use config::{LookupSettings, ServerSettings, SevaConfig};
pub use error::SevaError;
pub use lookup::{
    ApplicationSource, HttpApplicationSource, LookupHit, LookupResponse, TrackingLookup,
};
pub use normalizer::{download_link_for, expected_completion, normalize};
pub use record::RawApplicationRecord;
pub use samples::{sample_record, sample_summaries, SampleApplicationSource, SampleSummary};
pub use stages::{build_stage_checklist, StageEntry};
pub use status::{
    color_token, current_stage_label, default_remarks, display_label, status_icon, ColorToken,
    StatusCode,
};
pub use tracking_code::TrackingCode;
pub use view::TrackingView;

/// Quick actions offered next to a tracking result: (label, path)
pub const QUICK_ACTIONS: [(&str, &str); 4] = [
    ("नया आवेदन | New Application", "/birth-certificate"),
    ("डाउनलोड | Download", "/download-certificate"),
    ("शिकायत | Complaint", "/complaint"),
    ("सहायता | Help", "/help"),
];

/// Help desk contact lines shown below a tracking result
pub const HELP_CONTACTS: [(&str, &str); 5] = [
    ("कार्यालय", "ग्राम पंचायत कार्यालय"),
    ("फोन", "1800-XXX-XXXX"),
    ("ईमेल", "help@grampanchayat.gov.in"),
    ("समय", "सोमवार - शुक्रवार, 10:00 AM - 5:00 PM"),
    ("व्हाट्सऐप", "+91-XXXXX-XXXXX"),
];
