pub mod accounts;
pub mod appointments;
pub mod billing;
pub mod employees;
pub mod health;
pub mod medical_records;
pub mod patient_info;
pub mod patients;
pub mod reviews;
