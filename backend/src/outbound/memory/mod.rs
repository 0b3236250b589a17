//! In-process product store.
//!
//! Backs the service when no `database_url` is configured and drives the
//! unit and behaviour tests. Contents are lost when the process exits.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::Product;
use crate::domain::ports::{ProductRepository, ProductRepositoryError};

/// `RwLock<HashMap>`-backed [`ProductRepository`].
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<HashMap<Uuid, Product>>,
}

impl InMemoryProductRepository {
    /// Store pre-populated with `products`.
    #[must_use]
    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        Self {
            products: RwLock::new(products.into_iter().map(|p| (p.id, p)).collect()),
        }
    }
}

fn poisoned<T>(_: PoisonError<T>) -> ProductRepositoryError {
    ProductRepositoryError::connection("in-memory product store lock poisoned")
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_name(&self, name: &str) -> Result<Option<Product>, ProductRepositoryError> {
        let guard = self.products.read().map_err(poisoned)?;
        Ok(guard.values().find(|p| p.name == name).cloned())
    }

    async fn list_recent_first(&self) -> Result<Vec<Product>, ProductRepositoryError> {
        let guard = self.products.read().map_err(poisoned)?;
        let mut products: Vec<Product> = guard.values().cloned().collect();
        products.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        Ok(products)
    }

    async fn find_by_id(&self, id: &Uuid) -> Result<Option<Product>, ProductRepositoryError> {
        let guard = self.products.read().map_err(poisoned)?;
        Ok(guard.get(id).cloned())
    }

    async fn insert(&self, product: &Product) -> Result<(), ProductRepositoryError> {
        let mut guard = self.products.write().map_err(poisoned)?;
        guard.insert(product.id, product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<bool, ProductRepositoryError> {
        let mut guard = self.products.write().map_err(poisoned)?;
        match guard.get_mut(&product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: &Uuid) -> Result<bool, ProductRepositoryError> {
        let mut guard = self.products.write().map_err(poisoned)?;
        Ok(guard.remove(id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ProductDraft, ProductStatus};
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;

    fn product(name: &str, minute: u32) -> Product {
        let at: DateTime<Utc> = Utc
            .with_ymd_and_hms(2024, 5, 1, 9, minute, 0)
            .single()
            .expect("valid timestamp");
        Product::create(
            ProductDraft {
                name: name.to_owned(),
                description: "D".to_owned(),
                manager: "M".to_owned(),
                password: "p".to_owned(),
                status: None,
            },
            at,
        )
    }

    #[rstest]
    #[tokio::test]
    async fn lists_most_recently_updated_first() {
        let repo = InMemoryProductRepository::with_products([
            product("old", 1),
            product("new", 3),
            product("mid", 2),
        ]);

        let names: Vec<String> = repo
            .list_recent_first()
            .await
            .expect("list")
            .into_iter()
            .map(|p| p.name)
            .collect();

        assert_eq!(names, ["new", "mid", "old"]);
    }

    #[rstest]
    #[tokio::test]
    async fn name_lookup_is_exact() {
        let repo = InMemoryProductRepository::with_products([product("Lamp", 1)]);
        assert!(repo.find_by_name("Lamp").await.expect("lookup").is_some());
        assert!(repo.find_by_name("lamp").await.expect("lookup").is_none());
    }

    #[rstest]
    #[tokio::test]
    async fn update_and_delete_report_missing_records() {
        let repo = InMemoryProductRepository::default();
        let ghost = product("ghost", 1);

        assert!(!repo.update(&ghost).await.expect("update"));
        assert!(!repo.delete(&ghost.id).await.expect("delete"));
    }

    #[rstest]
    #[tokio::test]
    async fn update_overwrites_the_whole_record() {
        let mut stored = product("Lamp", 1);
        let repo = InMemoryProductRepository::with_products([stored.clone()]);
        stored.status = ProductStatus::SoldOut;
        stored.password = "rotated".to_owned();

        assert!(repo.update(&stored).await.expect("update"));
        assert_eq!(
            repo.find_by_id(&stored.id).await.expect("lookup"),
            Some(stored)
        );
    }
}
