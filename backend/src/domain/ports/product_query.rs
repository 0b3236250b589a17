//! Driving port for product reads.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, ProductView};

/// Domain use-case port for listing and fetching products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductQuery: Send + Sync {
    /// Every product, most recently updated first. Empty is not an error.
    async fn list(&self) -> Result<Vec<ProductView>, Error>;

    /// A single product.
    ///
    /// # Errors
    ///
    /// Returns not-found when no record has the identifier.
    async fn get(&self, product_id: Uuid) -> Result<ProductView, Error>;
}
