//! PostgreSQL persistence adapter using Diesel.
//!
//! `diesel-async` connections are pooled with `bb8`. Row structs and the
//! table definition stay private to this module; only the repository, the
//! pool and the migration runner are exported.
//!
//! # Example
//!
//! ```ignore
//! use product_service::outbound::persistence::{DbPool, DieselProductRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/products")).await?;
//! let repo = DieselProductRepository::new(pool);
//! ```

mod diesel_product_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_product_repository::DieselProductRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
