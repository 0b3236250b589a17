//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the product routes, the health probes and the schema
//! wrappers from [`crate::inbound::http::schemas`]. The document backs Swagger
//! UI in debug builds and is exported via `cargo run --bin openapi-dump`.

use crate::inbound::http::schemas::{
    ErrorCodeSchema, ErrorEnvelopeSchema, PasswordBodySchema, ProductBodySchema,
    ProductEnvelopeSchema, ProductListEnvelopeSchema, ProductStatusSchema, ProductViewSchema,
};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product catalogue API",
        description = "CRUD over products guarded by a per-record password."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::products::create_product,
        crate::inbound::http::products::list_products,
        crate::inbound::http::products::get_product,
        crate::inbound::http::products::update_product,
        crate::inbound::http::products::delete_product,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorCodeSchema,
        ErrorEnvelopeSchema,
        ProductStatusSchema,
        ProductViewSchema,
        ProductBodySchema,
        PasswordBodySchema,
        ProductEnvelopeSchema,
        ProductListEnvelopeSchema,
    )),
    tags(
        (name = "products", description = "Product registration and maintenance"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's surface.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    // utoipa replaces :: with . in schema names
    const PRODUCT_VIEW_SCHEMA_NAME: &str = "crate.domain.ProductView";

    #[rstest]
    #[case("/products")]
    #[case("/products/{product_id}")]
    #[case("/health/ready")]
    #[case("/health/live")]
    fn openapi_registers_paths(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing path {path}");
    }

    #[rstest]
    fn product_view_schema_omits_password() {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas
            .get(PRODUCT_VIEW_SCHEMA_NAME)
            .expect("ProductView schema");

        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(obj.properties.contains_key("createdAt"));
                assert!(obj.properties.contains_key("status"));
                assert!(!obj.properties.contains_key("password"));
            }
            _ => panic!("expected Object schema"),
        }
    }
}
