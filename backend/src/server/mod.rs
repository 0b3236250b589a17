//! Server construction and middleware wiring.

mod config;
#[cfg(feature = "metrics")]
mod metrics;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use mockable::DefaultClock;
use tracing::info;

use product_service::Trace;
#[cfg(debug_assertions)]
use product_service::doc::ApiDoc;
use product_service::domain::ports::{ProductCommand, ProductQuery, ProductRepository};
use product_service::domain::{Locale, ProductService};
use product_service::inbound::http::health::{HealthState, live, ready};
use product_service::inbound::http::products::configure;
use product_service::inbound::http::state::HttpState;
use product_service::outbound::memory::InMemoryProductRepository;
use product_service::outbound::persistence::DieselProductRepository;
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn product_state<R>(repo: R, locale: Locale) -> HttpState
where
    R: ProductRepository + 'static,
{
    let service = Arc::new(ProductService::new(
        Arc::new(repo),
        Arc::new(DefaultClock),
        locale,
    ));
    let command: Arc<dyn ProductCommand> = service.clone();
    let query: Arc<dyn ProductQuery> = service;
    HttpState::new(command, query, locale)
}

/// Pick the product store: PostgreSQL when a pool is configured, otherwise
/// an in-process map that is lost on restart.
fn build_http_state(config: &ServerConfig) -> HttpState {
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL product store");
            product_state(DieselProductRepository::new(pool.clone()), config.locale)
        }
        None => {
            info!("using in-memory product store");
            product_state(InMemoryProductRepository::default(), config.locale)
        }
    }
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
    locale: Locale,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = App::new()
        .app_data(health_state)
        .app_data(http_state)
        .wrap(Trace)
        .configure(configure(locale))
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Construct an Actix HTTP server for the product API.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket or registering
/// metrics fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let server_health_state = health_state.clone();
    let http_state = web::Data::new(build_http_state(&config));
    let locale = config.locale;

    #[cfg(feature = "metrics")]
    let prometheus = metrics::make_metrics()?;

    let server = HttpServer::new(move || {
        let app = build_app(server_health_state.clone(), http_state.clone(), locale);

        #[cfg(feature = "metrics")]
        let app = app.wrap(prometheus.clone());

        app
    })
    .bind(config.bind_addr())?
    .run();

    health_state.mark_ready();
    Ok(server)
}
