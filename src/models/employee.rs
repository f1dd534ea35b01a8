use serde::{Deserialize, Serialize};

/// Clinic staff member. `employee_type` is a single-character role code
/// (e.g. 'D' dentist, 'H' hygienist, 'R' receptionist).
#[derive(Debug, Clone, Serialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub employee_type: String,
    pub address: String,
    pub annual_salary: f64,
    pub branch_city: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewEmployee {
    pub name: String,
    pub employee_type: String,
    pub address: String,
    pub annual_salary: f64,
    pub branch_city: String,
}
