//! Driven port for product persistence.
//!
//! [`ProductRepository`] is the store capability handed to the product
//! service. It deliberately knows nothing about duplicate names or passwords:
//! those checks live in the service, and the store only reads and writes
//! whole records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Product;

use super::define_port_error;

define_port_error! {
    /// Errors raised by product repository adapters.
    pub enum ProductRepositoryError {
        /// The store could not be reached or a connection was not available.
        Connection { message: String } =>
            "product repository connection failed: {message}",
        /// A query or mutation failed during execution.
        Query { message: String } =>
            "product repository query failed: {message}",
    }
}

/// Port for product storage and retrieval.
///
/// Records are returned with their password so the service can run the
/// ownership check; projection to the outward view happens in the service.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Fetch the first record whose name equals `name` exactly.
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductRepositoryError>;

    /// Fetch every record, most recently updated first.
    async fn list_recent_first(&self) -> Result<Vec<Product>, ProductRepositoryError>;

    /// Fetch a record by identifier.
    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Product>, ProductRepositoryError>;

    /// Persist a new record.
    async fn insert(&self, product: &Product) -> Result<(), ProductRepositoryError>;

    /// Overwrite an existing record in full.
    ///
    /// Returns `Ok(false)` when no record with the product's identifier
    /// exists. Last write wins.
    async fn update(&self, product: &Product) -> Result<bool, ProductRepositoryError>;

    /// Remove a record by identifier.
    ///
    /// Returns `Ok(false)` when nothing was removed.
    async fn delete(&self, id: &Uuid) -> Result<bool, ProductRepositoryError>;
}
