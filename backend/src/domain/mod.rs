//! Domain primitives, use cases and ports.
//!
//! Purpose: define the product record, its validation rules and the services
//! that orchestrate store access. Nothing here knows about HTTP or SQL; the
//! inbound and outbound adapters translate at the edges.
//!
//! Public surface:
//! - Error (alias to `error::Error`): transport-agnostic failure payload.
//! - Product / ProductView: persisted record and its password-free projection.
//! - validate_product / validate_password: request body rule sets.
//! - ProductService: implements the `ProductCommand` and `ProductQuery` ports.

pub mod error;
pub mod messages;
pub mod ports;
pub mod product;
pub mod product_service;
pub mod trace_id;
pub mod validation;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::messages::{Locale, Message, UnsupportedLocale};
pub use self::product::{Product, ProductDraft, ProductStatus, ProductView, UnknownStatus};
pub use self::product_service::ProductService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::validation::{
    Field, FieldViolation, PasswordInput, ValidationError, ViolationKind, validate_password,
    validate_product,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use product_service::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
