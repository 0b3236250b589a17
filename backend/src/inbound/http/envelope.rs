//! Success envelopes.
//!
//! Single-record responses put the payload under `data`; the list route keeps
//! the `products` key existing clients read.

use actix_web::HttpResponse;
use actix_web::http::StatusCode;
use serde::Serialize;

use crate::domain::ProductView;

#[derive(Debug, Serialize)]
struct DataEnvelope<'a, T> {
    status: u16,
    message: &'a str,
    data: T,
}

#[derive(Debug, Serialize)]
struct ProductsEnvelope<'a> {
    status: u16,
    message: &'a str,
    products: Vec<ProductView>,
}

/// `{ status, message, data }` with `status` echoing the HTTP status.
pub fn data<T: Serialize>(status: StatusCode, message: &str, data: T) -> HttpResponse {
    HttpResponse::build(status).json(DataEnvelope {
        status: status.as_u16(),
        message,
        data,
    })
}

/// `{ status: 200, message, products }`.
pub fn products(message: &str, products: Vec<ProductView>) -> HttpResponse {
    let status = StatusCode::OK;
    HttpResponse::build(status).json(ProductsEnvelope {
        status: status.as_u16(),
        message,
        products,
    })
}
