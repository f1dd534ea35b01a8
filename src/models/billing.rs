use serde::{Deserialize, Serialize};

use super::enums::PaymentType;

#[derive(Debug, Clone, Serialize)]
pub struct Billing {
    pub id: i64,
    pub patient_id: i64,
    pub patient_amount: f64,
    pub insurance_amount: f64,
    pub total_amount: f64,
    pub payment_type: PaymentType,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewBilling {
    pub patient_id: i64,
    pub patient_amount: f64,
    pub insurance_amount: f64,
    pub total_amount: f64,
    pub payment_type: PaymentType,
}

/// Claim filed against a patient's insurance plan. Keyed to the
/// personal-detail record, since the plan belongs to the person.
#[derive(Debug, Clone, Serialize)]
pub struct InsuranceClaim {
    pub id: i64,
    pub patient_info_id: i64,
    pub insurance_company: String,
    pub plan_number: i64,
    pub coverage: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewInsuranceClaim {
    pub patient_info_id: i64,
    pub insurance_company: String,
    pub plan_number: i64,
    pub coverage: f64,
}
