use std::str::FromStr;

use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::enums::PaymentType;
use crate::models::{Billing, InsuranceClaim};

pub fn insert_billing(conn: &Connection, billing: &Billing) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO billing (patient_id, patient_amount, insurance_amount, total_amount, payment_type)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            billing.patient_id,
            billing.patient_amount,
            billing.insurance_amount,
            billing.total_amount,
            billing.payment_type.as_str(),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_billing(conn: &Connection, id: i64) -> Result<Option<Billing>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, patient_id, patient_amount, insurance_amount, total_amount, payment_type
             FROM billing WHERE id = ?1",
            params![id],
            |row| {
                Ok((
                    row.get::<_, i64>(0)?,
                    row.get::<_, i64>(1)?,
                    row.get::<_, f64>(2)?,
                    row.get::<_, f64>(3)?,
                    row.get::<_, f64>(4)?,
                    row.get::<_, String>(5)?,
                ))
            },
        )
        .optional()?;

    row.map(|(id, patient_id, patient_amount, insurance_amount, total_amount, payment_type)| {
        Ok(Billing {
            id,
            patient_id,
            patient_amount,
            insurance_amount,
            total_amount,
            payment_type: PaymentType::from_str(&payment_type)?,
        })
    })
    .transpose()
}

pub fn list_billing_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Billing>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, patient_amount, insurance_amount, total_amount, payment_type
         FROM billing WHERE patient_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![patient_id], |row| {
        Ok((
            row.get::<_, i64>(0)?,
            row.get::<_, i64>(1)?,
            row.get::<_, f64>(2)?,
            row.get::<_, f64>(3)?,
            row.get::<_, f64>(4)?,
            row.get::<_, String>(5)?,
        ))
    })?;

    let mut bills = Vec::new();
    for row in rows {
        let (id, patient_id, patient_amount, insurance_amount, total_amount, payment_type) = row?;
        bills.push(Billing {
            id,
            patient_id,
            patient_amount,
            insurance_amount,
            total_amount,
            payment_type: PaymentType::from_str(&payment_type)?,
        });
    }
    Ok(bills)
}

pub fn insert_claim(conn: &Connection, claim: &InsuranceClaim) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO insurance_claims (patient_info_id, insurance_company, plan_number, coverage)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            claim.patient_info_id,
            claim.insurance_company,
            claim.plan_number,
            claim.coverage,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_claim(conn: &Connection, id: i64) -> Result<Option<InsuranceClaim>, DatabaseError> {
    let claim = conn
        .query_row(
            "SELECT id, patient_info_id, insurance_company, plan_number, coverage
             FROM insurance_claims WHERE id = ?1",
            params![id],
            |row| {
                Ok(InsuranceClaim {
                    id: row.get(0)?,
                    patient_info_id: row.get(1)?,
                    insurance_company: row.get(2)?,
                    plan_number: row.get(3)?,
                    coverage: row.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(claim)
}
