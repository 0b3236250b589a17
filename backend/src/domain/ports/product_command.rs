//! Driving port for product mutations.
//!
//! Inbound adapters validate request bodies into [`ProductDraft`]s and call
//! this port; the implementation owns the duplicate-name pre-check and the
//! per-record password gate.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, ProductDraft, ProductView};

/// Request to create a product.
#[derive(Debug, Clone)]
pub struct CreateProductRequest {
    /// Validated fields for the new record.
    pub draft: ProductDraft,
}

/// Request to replace a product's fields.
#[derive(Debug, Clone)]
pub struct UpdateProductRequest {
    /// Target record.
    pub product_id: Uuid,
    /// Replacement fields. `draft.password` must equal the stored password.
    pub draft: ProductDraft,
}

/// Request to delete a product.
#[derive(Debug, Clone)]
pub struct DeleteProductRequest {
    /// Target record.
    pub product_id: Uuid,
    /// Must equal the stored password.
    pub password: String,
}

/// Domain use-case port for creating, updating and deleting products.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductCommand: Send + Sync {
    /// Create a product after the duplicate-name pre-check.
    ///
    /// # Errors
    ///
    /// Returns a conflict error when a record with the same name exists.
    async fn create(&self, request: CreateProductRequest) -> Result<ProductView, Error>;

    /// Replace a product's fields after the password check.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown identifier and unauthorised when the
    /// password does not match.
    async fn update(&self, request: UpdateProductRequest) -> Result<ProductView, Error>;

    /// Delete a product after the password check, returning its last values.
    ///
    /// # Errors
    ///
    /// Returns not-found for an unknown identifier, invalid-request for an
    /// empty password and unauthorised when the password does not match.
    async fn delete(&self, request: DeleteProductRequest) -> Result<ProductView, Error>;
}
