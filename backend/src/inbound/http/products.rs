//! Product API handlers.
//!
//! ```text
//! POST   /products               {"name","manager","description","password","status"?}
//! GET    /products
//! GET    /products/{product_id}
//! PUT    /products/{product_id}  {"name","manager","description","password","status"?}
//! DELETE /products/{product_id}  {"password"}
//! ```
//!
//! Bodies are taken as raw JSON and run through the domain rule sets so a
//! response lists every violated field at once. A DELETE without a body is
//! read as `{}` so the missing password is reported like any other field.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::{Map, Value, json};
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{CreateProductRequest, DeleteProductRequest, UpdateProductRequest};
use crate::domain::{Error, Locale, Message, validate_password, validate_product};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope;
use crate::inbound::http::error::{json_error_handler, malformed_body};
use crate::inbound::http::schemas::{
    ErrorEnvelopeSchema, PasswordBodySchema, ProductBodySchema, ProductEnvelopeSchema,
    ProductListEnvelopeSchema,
};
use crate::inbound::http::state::HttpState;

/// Identifiers that are not UUIDs cannot name a product, so they are
/// reported as not found rather than as a bad request.
fn parse_product_id(raw: &str, locale: Locale) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| {
        Error::not_found(locale.text(Message::ProductNotFound))
            .with_details(json!({ "productId": raw }))
    })
}

/// Register a product.
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductBodySchema,
    responses(
        (status = 201, description = "Product created", body = ProductEnvelopeSchema),
        (status = 400, description = "Validation failed or malformed body", body = ErrorEnvelopeSchema),
        (status = 409, description = "A product with this name exists", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema),
        (status = 503, description = "Product store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "createProduct"
)]
#[post("/products")]
pub async fn create_product(
    state: web::Data<HttpState>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = validate_product(&payload.into_inner(), state.locale)?;
    let product = state.products.create(CreateProductRequest { draft }).await?;
    Ok(envelope::data(
        StatusCode::CREATED,
        state.locale.text(Message::ProductCreated),
        product,
    ))
}

/// List products, most recently updated first.
#[utoipa::path(
    get,
    path = "/products",
    responses(
        (status = 200, description = "Products", body = ProductListEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema),
        (status = 503, description = "Product store unavailable", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "listProducts"
)]
#[get("/products")]
pub async fn list_products(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let products = state.products_query.list().await?;
    Ok(envelope::products(
        state.locale.text(Message::ProductsListed),
        products,
    ))
}

/// Fetch one product.
#[utoipa::path(
    get,
    path = "/products/{product_id}",
    params(("product_id" = Uuid, Path, description = "Product identifier")),
    responses(
        (status = 200, description = "Product", body = ProductEnvelopeSchema),
        (status = 404, description = "No such product", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "getProduct"
)]
#[get("/products/{product_id}")]
pub async fn get_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let product_id = parse_product_id(&path.into_inner(), state.locale)?;
    let product = state.products_query.get(product_id).await?;
    Ok(envelope::data(
        StatusCode::OK,
        state.locale.text(Message::ProductFetched),
        product,
    ))
}

/// Replace a product's fields. The body's password must match the stored one.
#[utoipa::path(
    put,
    path = "/products/{product_id}",
    params(("product_id" = Uuid, Path, description = "Product identifier")),
    request_body = ProductBodySchema,
    responses(
        (status = 200, description = "Product updated", body = ProductEnvelopeSchema),
        (status = 400, description = "Validation failed or malformed body", body = ErrorEnvelopeSchema),
        (status = 401, description = "Password does not match", body = ErrorEnvelopeSchema),
        (status = 404, description = "No such product", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "updateProduct"
)]
#[put("/products/{product_id}")]
pub async fn update_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<HttpResponse> {
    let draft = validate_product(&payload.into_inner(), state.locale)?;
    let product_id = parse_product_id(&path.into_inner(), state.locale)?;
    let product = state
        .products
        .update(UpdateProductRequest { product_id, draft })
        .await?;
    Ok(envelope::data(
        StatusCode::OK,
        state.locale.text(Message::ProductUpdated),
        product,
    ))
}

/// Delete a product, returning its last values.
#[utoipa::path(
    delete,
    path = "/products/{product_id}",
    params(("product_id" = Uuid, Path, description = "Product identifier")),
    request_body = PasswordBodySchema,
    responses(
        (status = 200, description = "Product deleted", body = ProductEnvelopeSchema),
        (status = 400, description = "Password missing or malformed body", body = ErrorEnvelopeSchema),
        (status = 401, description = "Password does not match", body = ErrorEnvelopeSchema),
        (status = 404, description = "No such product", body = ErrorEnvelopeSchema),
        (status = 500, description = "Internal server error", body = ErrorEnvelopeSchema)
    ),
    tags = ["products"],
    operation_id = "deleteProduct"
)]
#[delete("/products/{product_id}")]
pub async fn delete_product(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Bytes,
) -> ApiResult<HttpResponse> {
    let body = optional_json_body(&payload, state.locale)?;
    let password = validate_password(&body, state.locale)?;
    let product_id = parse_product_id(&path.into_inner(), state.locale)?;
    let product = state
        .products
        .delete(DeleteProductRequest {
            product_id,
            password: password.0,
        })
        .await?;
    Ok(envelope::data(
        StatusCode::OK,
        state.locale.text(Message::ProductDeleted),
        product,
    ))
}

/// Parse an optional JSON body, treating an empty or blank one as `{}`.
fn optional_json_body(bytes: &[u8], locale: Locale) -> Result<Value, Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(bytes).map_err(|err| {
        warn!(error = %err, "rejected request body");
        malformed_body(locale)
    })
}

/// Register the product routes and the JSON error handler on `cfg`.
pub fn configure(locale: Locale) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler(locale)))
            .service(create_product)
            .service(list_products)
            .service(get_product)
            .service(update_product)
            .service(delete_product);
    }
}

#[cfg(test)]
#[path = "products_tests.rs"]
mod tests;
