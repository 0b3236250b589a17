//! Shared HTTP adapter state.
//!
//! Handlers accept this via `web::Data` so they depend only on the product
//! ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::Locale;
use crate::domain::ports::{ProductCommand, ProductQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub products: Arc<dyn ProductCommand>,
    pub products_query: Arc<dyn ProductQuery>,
    /// Language for envelope and error messages produced by the adapter.
    pub locale: Locale,
}

impl HttpState {
    /// Bundle the product ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use mockable::DefaultClock;
    /// use product_service::domain::{Locale, ProductService};
    /// use product_service::inbound::http::state::HttpState;
    /// use product_service::outbound::memory::InMemoryProductRepository;
    ///
    /// let service = Arc::new(ProductService::new(
    ///     Arc::new(InMemoryProductRepository::default()),
    ///     Arc::new(DefaultClock),
    ///     Locale::Ko,
    /// ));
    /// let state = HttpState::new(service.clone(), service, Locale::Ko);
    /// assert_eq!(state.locale, Locale::Ko);
    /// ```
    pub fn new(
        products: Arc<dyn ProductCommand>,
        products_query: Arc<dyn ProductQuery>,
        locale: Locale,
    ) -> Self {
        Self {
            products,
            products_query,
            locale,
        }
    }
}
