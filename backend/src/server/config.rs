//! HTTP server configuration object and helpers.

use std::net::SocketAddr;

use product_service::domain::Locale;
use product_service::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) locale: Locale,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Construct a server configuration that keeps products in memory.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, locale: Locale) -> Self {
        Self {
            bind_addr,
            locale,
            db_pool: None,
        }
    }

    /// Attach a database connection pool so products persist in PostgreSQL.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
