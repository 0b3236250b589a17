//! Outbound adapters implementing the product repository port.
//!
//! - **memory**: process-local store used when no database is configured.
//! - **persistence**: PostgreSQL via Diesel.
//!
//! Adapters translate between domain records and their storage shape and
//! contain no business logic.

pub mod memory;
pub mod persistence;
