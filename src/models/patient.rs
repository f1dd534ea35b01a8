use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Clinical identity. Several patients may share one info record
/// (family members registered under the same personal-detail row).
#[derive(Debug, Clone, Serialize)]
pub struct Patient {
    pub id: i64,
    pub info_id: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewPatient {
    pub info_id: i64,
}

/// Personal-detail record for one or more patients.
#[derive(Debug, Clone, Serialize)]
pub struct PatientInfo {
    pub id: i64,
    pub address: String,
    pub name: String,
    pub gender: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: NaiveDate,
    pub insurance: Option<String>,
    pub representative: Option<Representative>,
}

/// Legal representative for a patient (parent, guardian, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Representative {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub relationship: String,
}

/// Patient-info creation request. Required fields arrive as options so
/// that their absence surfaces as a validation failure with a message,
/// not as a deserialization error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewPatientInfo {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub insurance: Option<String>,
    #[serde(default)]
    pub representative: Option<Representative>,
}
