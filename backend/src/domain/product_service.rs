//! Product use cases.
//!
//! [`ProductService`] implements both driving ports on top of a
//! [`ProductRepository`]. Each operation is a straight sequence of lookup,
//! check and mutation; there is no locking, so the duplicate-name pre-check
//! and the password check race with concurrent writers (last write wins).

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, SubsecRound, Utc};
use mockable::Clock;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::ports::{
    CreateProductRequest, DeleteProductRequest, ProductCommand, ProductQuery, ProductRepository,
    ProductRepositoryError, UpdateProductRequest,
};
use crate::domain::{Error, Locale, Message, Product, ProductView};

/// Domain service implementing [`ProductCommand`] and [`ProductQuery`].
#[derive(Clone)]
pub struct ProductService<R> {
    repo: Arc<R>,
    clock: Arc<dyn Clock>,
    locale: Locale,
}

impl<R> ProductService<R> {
    /// Create a service over `repo`, stamping records with `clock` and
    /// rendering messages in `locale`.
    #[must_use]
    pub fn new(repo: Arc<R>, clock: Arc<dyn Clock>, locale: Locale) -> Self {
        Self {
            repo,
            clock,
            locale,
        }
    }

    /// Clock reading at the microsecond precision the store keeps.
    fn now(&self) -> DateTime<Utc> {
        self.clock.utc().trunc_subsecs(6)
    }

    fn map_repository_error(&self, err: ProductRepositoryError) -> Error {
        match err {
            ProductRepositoryError::Connection { message } => {
                error!(%message, "product store unavailable");
                Error::service_unavailable(self.locale.text(Message::StoreUnavailable))
            }
            ProductRepositoryError::Query { message } => {
                error!(%message, "product store query failed");
                Error::internal(self.locale.text(Message::InternalError))
            }
        }
    }

    fn not_found(&self, product_id: Uuid) -> Error {
        Error::not_found(self.locale.text(Message::ProductNotFound))
            .with_details(serde_json::json!({ "productId": product_id }))
    }
}

impl<R: ProductRepository> ProductService<R> {
    async fn load(&self, product_id: Uuid) -> Result<Product, Error> {
        self.repo
            .find_by_id(&product_id)
            .await
            .map_err(|err| self.map_repository_error(err))?
            .ok_or_else(|| self.not_found(product_id))
    }

    fn check_password(&self, product: &Product, candidate: &str) -> Result<(), Error> {
        if product.password_matches(candidate) {
            return Ok(());
        }
        warn!(product_id = %product.id, "product password mismatch");
        Err(Error::unauthorized(self.locale.text(Message::PasswordMismatch)))
    }
}

#[async_trait]
impl<R: ProductRepository> ProductCommand for ProductService<R> {
    async fn create(&self, request: CreateProductRequest) -> Result<ProductView, Error> {
        let CreateProductRequest { draft } = request;
        let existing = self
            .repo
            .find_by_name(&draft.name)
            .await
            .map_err(|err| self.map_repository_error(err))?;
        if existing.is_some() {
            return Err(Error::conflict(self.locale.text(Message::DuplicateName))
                .with_details(serde_json::json!({ "name": draft.name })));
        }

        let product = Product::create(draft, self.now());
        self.repo
            .insert(&product)
            .await
            .map_err(|err| self.map_repository_error(err))?;
        info!(product_id = %product.id, "product created");
        Ok(product.into())
    }

    async fn update(&self, request: UpdateProductRequest) -> Result<ProductView, Error> {
        let UpdateProductRequest { product_id, draft } = request;
        let mut product = self.load(product_id).await?;
        self.check_password(&product, &draft.password)?;

        product.replace_with(draft, self.now());
        let updated = self
            .repo
            .update(&product)
            .await
            .map_err(|err| self.map_repository_error(err))?;
        if !updated {
            return Err(self.not_found(product_id));
        }
        info!(product_id = %product.id, "product updated");
        Ok(product.into())
    }

    async fn delete(&self, request: DeleteProductRequest) -> Result<ProductView, Error> {
        let DeleteProductRequest {
            product_id,
            password,
        } = request;
        let product = self.load(product_id).await?;
        if password.is_empty() {
            return Err(Error::invalid_request(
                self.locale.text(Message::PasswordRequired),
            ));
        }
        self.check_password(&product, &password)?;

        let deleted = self
            .repo
            .delete(&product_id)
            .await
            .map_err(|err| self.map_repository_error(err))?;
        if !deleted {
            return Err(self.not_found(product_id));
        }
        info!(product_id = %product.id, "product deleted");
        Ok(product.into())
    }
}

#[async_trait]
impl<R: ProductRepository> ProductQuery for ProductService<R> {
    async fn list(&self) -> Result<Vec<ProductView>, Error> {
        let products = self
            .repo
            .list_recent_first()
            .await
            .map_err(|err| self.map_repository_error(err))?;
        Ok(products.into_iter().map(ProductView::from).collect())
    }

    async fn get(&self, product_id: Uuid) -> Result<ProductView, Error> {
        self.load(product_id).await.map(ProductView::from)
    }
}

#[cfg(test)]
#[path = "product_service_tests.rs"]
mod tests;
