//! OpenAPI schema definitions.
//!
//! Domain types stay free of `ToSchema`; the wrappers here mirror their wire
//! shape for documentation only.

#![expect(dead_code, reason = "schema wrappers are only read by utoipa")]

use chrono::{DateTime, Utc};
use utoipa::ToSchema;
use uuid::Uuid;

/// Stable machine-readable error codes.
#[derive(ToSchema)]
#[schema(as = crate::domain::ErrorCode)]
pub enum ErrorCodeSchema {
    /// Malformed body or failed validation.
    #[schema(rename = "invalid_request")]
    InvalidRequest,
    /// Record password did not match.
    #[schema(rename = "unauthorized")]
    Unauthorized,
    /// No product with the identifier.
    #[schema(rename = "not_found")]
    NotFound,
    /// A product with the same name exists.
    #[schema(rename = "conflict")]
    Conflict,
    /// The product store is unreachable.
    #[schema(rename = "service_unavailable")]
    ServiceUnavailable,
    /// Unexpected failure.
    #[schema(rename = "internal_error")]
    InternalError,
}

/// Error response envelope.
#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ErrorEnvelopeSchema {
    /// HTTP status code, echoed as a number.
    #[schema(example = 404)]
    status: u16,
    /// Localised human-readable message.
    #[schema(example = "상품이 존재하지 않습니다.")]
    message: String,
    code: ErrorCodeSchema,
    /// Correlation identifier, also sent in the `trace-id` header.
    trace_id: Option<Uuid>,
    /// Validation violations or other structured context.
    details: Option<serde_json::Value>,
}

/// Sale state.
#[derive(ToSchema)]
#[schema(as = crate::domain::ProductStatus)]
pub enum ProductStatusSchema {
    #[schema(rename = "FOR_SALE")]
    ForSale,
    #[schema(rename = "SOLD_OUT")]
    SoldOut,
}

/// A product as returned by every route. Never includes the password.
#[derive(ToSchema)]
#[schema(as = crate::domain::ProductView, rename_all = "camelCase")]
pub struct ProductViewSchema {
    id: Uuid,
    #[schema(example = "Desk lamp")]
    name: String,
    description: String,
    manager: String,
    status: ProductStatusSchema,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Body for create and update. Unknown keys are rejected.
#[derive(ToSchema)]
pub struct ProductBodySchema {
    #[schema(min_length = 1)]
    name: String,
    #[schema(min_length = 1)]
    manager: String,
    #[schema(min_length = 1)]
    description: String,
    /// Plaintext record password; must match the stored one on update.
    #[schema(min_length = 1)]
    password: String,
    /// Ignored on create, where new products start `FOR_SALE`; kept unchanged
    /// on update when omitted.
    status: Option<ProductStatusSchema>,
}

/// Body for delete.
#[derive(ToSchema)]
pub struct PasswordBodySchema {
    #[schema(min_length = 1)]
    password: String,
}

/// `{ status, message, data }` wrapping one product.
#[derive(ToSchema)]
pub struct ProductEnvelopeSchema {
    #[schema(example = 200)]
    status: u16,
    message: String,
    data: ProductViewSchema,
}

/// `{ status, message, products }` wrapping the product list.
#[derive(ToSchema)]
pub struct ProductListEnvelopeSchema {
    #[schema(example = 200)]
    status: u16,
    message: String,
    products: Vec<ProductViewSchema>,
}
