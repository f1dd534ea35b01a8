pub mod account;
pub mod appointment;
pub mod billing;
pub mod employee;
pub mod enums;
pub mod medical_record;
pub mod patient;
pub mod review;

pub use account::*;
pub use appointment::*;
pub use billing::*;
pub use employee::*;
pub use medical_record::*;
pub use patient::*;
pub use review::*;
