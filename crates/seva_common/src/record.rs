//! Raw application records as returned by the lookup service.
//!
//! Each service type (birth registration, residence certificate, water
//! connection, ...) stores its own field names. The record keeps the JSON
//! object as-is and resolves logical fields through ordered candidate lists,
//! so a missing or wrongly typed field degrades to "absent" instead of
//! failing deserialization.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::status::StatusCode;

/// Candidate fields for the applicant's name, in priority order
pub const NAME_FIELDS: [&str; 3] = ["childName", "applicantName", "ownerName"];

/// Candidate fields for the date shown as "application date"
pub const APPLICATION_DATE_FIELDS: [&str; 3] =
    ["submissionDate", "registrationDate", "applicationDate"];

/// Candidate fields for the date that processing timelines start from
pub const SUBMISSION_DATE_FIELDS: [&str; 2] = ["submissionDate", "registrationDate"];

pub const TYPE_FIELD: &str = "type";
pub const STATUS_FIELD: &str = "status";
pub const PAYMENT_STATUS_FIELD: &str = "paymentStatus";
pub const APPROVAL_DATE_FIELD: &str = "approvalDate";
pub const REMARKS_FIELD: &str = "remarks";
pub const FIELD_VERIFICATION_FIELD: &str = "fieldVerification";
pub const COMPLETED_DATE_FIELD: &str = "completedDate";

/// Payment status value that marks the fee as settled
pub const PAYMENT_PAID: &str = "paid";

/// Service type that carries an extra field verification stage
pub const RESIDENCE_CERTIFICATE: &str = "Residence Certificate";

/// One application record as the lookup service returned it
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawApplicationRecord {
    fields: Map<String, Value>,
}

impl RawApplicationRecord {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Build from any JSON value; non-objects become an empty record.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::default(),
        }
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// A field counts as present only when it is a non-empty string.
    pub fn text(&self, field: &str) -> Option<&str> {
        present_text(self.fields.get(field))
    }

    /// First present field among `candidates`.
    pub fn first_text(&self, candidates: &[&str]) -> Option<&str> {
        candidates.iter().find_map(|field| self.text(field))
    }

    pub fn application_type(&self) -> Option<&str> {
        self.text(TYPE_FIELD)
    }

    pub fn applicant_name(&self) -> Option<&str> {
        self.first_text(&NAME_FIELDS)
    }

    pub fn application_date(&self) -> Option<&str> {
        self.first_text(&APPLICATION_DATE_FIELDS)
    }

    pub fn submission_date(&self) -> Option<&str> {
        self.first_text(&SUBMISSION_DATE_FIELDS)
    }

    /// Status code; a missing status is an unknown code with an empty value.
    pub fn status(&self) -> StatusCode {
        StatusCode::from_code(self.text(STATUS_FIELD).unwrap_or_default())
    }

    pub fn is_paid(&self) -> bool {
        self.text(PAYMENT_STATUS_FIELD) == Some(PAYMENT_PAID)
    }

    pub fn approval_date(&self) -> Option<&str> {
        self.text(APPROVAL_DATE_FIELD)
    }

    pub fn remarks(&self) -> Option<&str> {
        self.text(REMARKS_FIELD)
    }

    /// `fieldVerification.completedDate`, when the nested object carries one.
    pub fn field_verification_date(&self) -> Option<&str> {
        self.fields
            .get(FIELD_VERIFICATION_FIELD)
            .and_then(Value::as_object)
            .and_then(|nested| present_text(nested.get(COMPLETED_DATE_FIELD)))
    }

    pub fn is_residence_certificate(&self) -> bool {
        self.application_type() == Some(RESIDENCE_CERTIFICATE)
    }
}

impl From<Map<String, Value>> for RawApplicationRecord {
    fn from(fields: Map<String, Value>) -> Self {
        Self::new(fields)
    }
}

impl<'de> Deserialize<'de> for RawApplicationRecord {
    /// Any JSON value is accepted; non-objects decode as an empty record.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Value::deserialize(deserializer).map(Self::from_value)
    }
}

fn present_text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
