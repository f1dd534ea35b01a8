use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct MedicalRecord {
    pub id: i64,
    pub patient_id: i64,
    pub diagnosis: String,
    pub treatment: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewMedicalRecord {
    pub patient_id: i64,
    pub diagnosis: String,
    pub treatment: String,
}
