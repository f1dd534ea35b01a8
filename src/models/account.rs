use serde::{Deserialize, Serialize};

/// Login identity, linking to patient and/or employee role references.
///
/// `type_code` discriminates which references must be carried:
/// 0 = patient, 1 = employee, 2 = both. The username is the natural key
/// and is case-sensitive. Accounts are created once and never updated
/// in place.
#[derive(Debug, Clone, Serialize)]
pub struct Account {
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub type_code: i64,
    pub patient_id: Option<i64>,
    pub employee_id: Option<i64>,
}

/// Account creation request body.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAccount {
    pub username: String,
    pub password: String,
    pub type_code: i64,
    #[serde(default)]
    pub patient_id: Option<i64>,
    #[serde(default)]
    pub employee_id: Option<i64>,
}

/// Authority derived from an account's type code. Never stored; always
/// recomputed from the type code (capability view, not inheritance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Role {
    #[serde(rename = "ROLE_PATIENT")]
    Patient,
    #[serde(rename = "ROLE_EMPLOYEE")]
    Employee,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Patient => "ROLE_PATIENT",
            Role::Employee => "ROLE_EMPLOYEE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let account = Account {
            username: "alice".into(),
            password_hash: "pbkdf2-sha256$1$AA$AA".into(),
            type_code: 0,
            patient_id: Some(1),
            employee_id: None,
        };
        let json = serde_json::to_string(&account).unwrap();
        assert!(!json.contains("password"));
        assert!(!json.contains("pbkdf2"));
    }

    #[test]
    fn roles_serialize_as_authority_strings() {
        assert_eq!(
            serde_json::to_string(&Role::Patient).unwrap(),
            "\"ROLE_PATIENT\""
        );
        assert_eq!(Role::Employee.as_str(), "ROLE_EMPLOYEE");
    }
}
