//! REST surface. Thin handlers that map HTTP onto the directory
//! operations; no business rules live here.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod server;
