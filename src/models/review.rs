use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Patient review of a dentist. Scores are 1..=5.
#[derive(Debug, Clone, Serialize)]
pub struct Review {
    pub id: i64,
    pub dentist_name: String,
    pub description: String,
    pub professionalism: i64,
    pub communication: i64,
    pub cleanliness: i64,
    pub date_of_review: NaiveDate,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewReview {
    pub dentist_name: String,
    pub description: String,
    pub professionalism: i64,
    pub communication: i64,
    pub cleanliness: i64,
    pub date_of_review: NaiveDate,
}
