//! Billing directory: patient bills and insurance claims.

use rusqlite::Connection;

use super::DirectoryError;
use crate::db::repository::billing as repo;
use crate::db::repository::patient;
use crate::models::{Billing, InsuranceClaim, NewBilling, NewInsuranceClaim};

pub fn create_billing(conn: &Connection, new: &NewBilling) -> Result<Billing, DirectoryError> {
    if new.patient_amount < 0.0 || new.insurance_amount < 0.0 || new.total_amount < 0.0 {
        return Err(DirectoryError::Validation(
            "billing amounts must not be negative".into(),
        ));
    }
    if !patient::patient_exists(conn, new.patient_id)? {
        return Err(DirectoryError::Validation(format!(
            "patient {} does not exist",
            new.patient_id
        )));
    }

    let mut billing = Billing {
        id: 0,
        patient_id: new.patient_id,
        patient_amount: new.patient_amount,
        insurance_amount: new.insurance_amount,
        total_amount: new.total_amount,
        payment_type: new.payment_type,
    };
    billing.id = repo::insert_billing(conn, &billing)?;

    tracing::info!(id = billing.id, patient_id = billing.patient_id, "Bill created");
    Ok(billing)
}

pub fn get_billing(conn: &Connection, id: i64) -> Result<Billing, DirectoryError> {
    repo::find_billing(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("bill {id} not found")))
}

pub fn list_billing_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Billing>, DirectoryError> {
    Ok(repo::list_billing_for_patient(conn, patient_id)?)
}

pub fn create_claim(
    conn: &Connection,
    new: &NewInsuranceClaim,
) -> Result<InsuranceClaim, DirectoryError> {
    if new.insurance_company.trim().is_empty() {
        return Err(DirectoryError::Validation(
            "insurance_company is required".into(),
        ));
    }
    if new.coverage < 0.0 {
        return Err(DirectoryError::Validation(
            "coverage must not be negative".into(),
        ));
    }
    if !patient::info_exists(conn, new.patient_info_id)? {
        return Err(DirectoryError::Validation(format!(
            "patient info {} does not exist",
            new.patient_info_id
        )));
    }

    let mut claim = InsuranceClaim {
        id: 0,
        patient_info_id: new.patient_info_id,
        insurance_company: new.insurance_company.clone(),
        plan_number: new.plan_number,
        coverage: new.coverage,
    };
    claim.id = repo::insert_claim(conn, &claim)?;

    tracing::info!(id = claim.id, "Insurance claim filed");
    Ok(claim)
}

pub fn get_claim(conn: &Connection, id: i64) -> Result<InsuranceClaim, DirectoryError> {
    repo::find_claim(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("insurance claim {id} not found")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::directory::patient as patient_dir;
    use crate::models::enums::PaymentType;
    use crate::models::NewPatientInfo;
    use chrono::NaiveDate;

    fn seed(conn: &Connection) -> (i64, i64) {
        let info = patient_dir::create_patient_info(
            conn,
            &NewPatientInfo {
                address: Some("1 Main St".into()),
                name: Some("Bob".into()),
                gender: Some("M".into()),
                email: Some("b@x.com".into()),
                phone: Some("555-1111".into()),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
                insurance: Some("SunLife".into()),
                representative: None,
            },
        )
        .unwrap();
        let patient = patient_dir::create_patient(conn, info.id).unwrap();
        (info.id, patient.id)
    }

    #[test]
    fn bill_create_and_fetch() {
        let conn = open_memory_database().unwrap();
        let (_, patient_id) = seed(&conn);

        let bill = create_billing(
            &conn,
            &NewBilling {
                patient_id,
                patient_amount: 40.0,
                insurance_amount: 160.0,
                total_amount: 200.0,
                payment_type: PaymentType::Insurance,
            },
        )
        .unwrap();

        assert_eq!(get_billing(&conn, bill.id).unwrap().total_amount, 200.0);
        assert_eq!(list_billing_for_patient(&conn, patient_id).unwrap().len(), 1);
    }

    #[test]
    fn negative_amounts_are_rejected() {
        let conn = open_memory_database().unwrap();
        let (_, patient_id) = seed(&conn);

        assert!(matches!(
            create_billing(
                &conn,
                &NewBilling {
                    patient_id,
                    patient_amount: -40.0,
                    insurance_amount: 0.0,
                    total_amount: 0.0,
                    payment_type: PaymentType::Cash,
                }
            ),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn claim_create_and_fetch() {
        let conn = open_memory_database().unwrap();
        let (info_id, _) = seed(&conn);

        let claim = create_claim(
            &conn,
            &NewInsuranceClaim {
                patient_info_id: info_id,
                insurance_company: "SunLife".into(),
                plan_number: 4471,
                coverage: 80.0,
            },
        )
        .unwrap();

        assert_eq!(get_claim(&conn, claim.id).unwrap().plan_number, 4471);
        assert!(matches!(
            get_claim(&conn, 999),
            Err(DirectoryError::NotFound(_))
        ));
    }

    #[test]
    fn claim_requires_company_and_known_info() {
        let conn = open_memory_database().unwrap();
        let (info_id, _) = seed(&conn);

        assert!(matches!(
            create_claim(
                &conn,
                &NewInsuranceClaim {
                    patient_info_id: info_id,
                    insurance_company: "".into(),
                    plan_number: 1,
                    coverage: 50.0,
                }
            ),
            Err(DirectoryError::Validation(_))
        ));
        assert!(matches!(
            create_claim(
                &conn,
                &NewInsuranceClaim {
                    patient_info_id: 999,
                    insurance_company: "SunLife".into(),
                    plan_number: 1,
                    coverage: 50.0,
                }
            ),
            Err(DirectoryError::Validation(_))
        ));
    }
}
