//! Directory services: validation and persistence workflows over the
//! repository layer. Every expected failure is a structured error
//! variant returned to the caller; only unexpected persistence
//! failures travel through `DirectoryError::Database`.

pub mod account;
pub mod appointment;
pub mod billing;
pub mod employee;
pub mod medical_record;
pub mod patient;
pub mod review;

use thiserror::Error;

use crate::db::DatabaseError;

#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Malformed or missing input, or a rule violation.
    #[error("{0}")]
    Validation(String),

    /// Duplicate key.
    #[error("{0}")]
    Conflict(String),

    /// Missing record on fetch or delete.
    #[error("{0}")]
    NotFound(String),

    /// Unexpected persistence failure.
    #[error(transparent)]
    Database(#[from] DatabaseError),
}

/// True when a required text field is absent or blank.
pub(crate) fn missing(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_treats_blank_as_absent() {
        assert!(missing(None));
        assert!(missing(Some("")));
        assert!(missing(Some("   ")));
        assert!(!missing(Some("x")));
    }
}
