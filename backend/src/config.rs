//! Service settings loaded via OrthoConfig.
//!
//! Values come from CLI flags, `PRODUCTS_*` environment variables and an
//! optional config file, in that order of precedence. The pool size carries
//! a loader default; accessors supply the remaining defaults.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::domain::{Locale, UnsupportedLocale};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised when a configured value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// `bind_addr` is not a socket address.
    #[error("invalid bind address '{value}': {message}")]
    BindAddr { value: String, message: String },
    /// `locale` names an unsupported language.
    #[error(transparent)]
    Locale(#[from] UnsupportedLocale),
}

/// Runtime configuration for the product service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRODUCTS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// PostgreSQL URL. When absent the service keeps products in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
    /// Language for response messages (`ko` or `en`).
    pub locale: Option<String>,
}

impl AppSettings {
    /// Parsed bind address, defaulting to `0.0.0.0:8080`.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|err: std::net::AddrParseError| SettingsError::BindAddr {
            value: raw.to_owned(),
            message: err.to_string(),
        })
    }

    /// Database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Pool size, defaulting to 10.
    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections
    }

    /// Parsed response locale, defaulting to Korean.
    pub fn locale(&self) -> Result<Locale, SettingsError> {
        match self.locale.as_deref() {
            Some(tag) => Ok(tag.parse()?),
            None => Ok(Locale::default()),
        }
    }
}
