//! Per-entity persistence functions. Each takes a borrowed
//! `rusqlite::Connection` and returns `DatabaseError` for anything
//! unexpected; "row absent" is an `Option`/count, never an error here.

pub mod account;
pub mod appointment;
pub mod billing;
pub mod employee;
pub mod medical_record;
pub mod patient;
pub mod review;
