//! Backend entry-point: loads settings, prepares the product store and serves
//! the REST API with its OpenAPI docs.

mod server;

use actix_web::web;
use color_eyre::eyre::{WrapErr, eyre};
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use product_service::config::AppSettings;
use product_service::inbound::http::health::HealthState;
use product_service::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::ServerConfig;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| eyre!("failed to load settings: {e}"))?;
    let mut config = ServerConfig::new(settings.bind_addr()?, settings.locale()?);
    match settings.database_url() {
        Some(url) => {
            let pool = connect(url, settings.db_max_connections()).await?;
            config = config.with_db_pool(pool);
        }
        None => warn!("PRODUCTS_DATABASE_URL not set; products will not survive a restart"),
    }

    let bind_addr = config.bind_addr();
    let health_state = web::Data::new(HealthState::new());
    let server = server::create_server(health_state.clone(), config)?;
    info!(%bind_addr, "product service listening");

    let outcome = server.await;
    health_state.mark_unhealthy();
    outcome.wrap_err("HTTP server failed")
}

/// Apply pending migrations, then open the async pool.
async fn connect(database_url: &str, max_connections: u32) -> color_eyre::Result<DbPool> {
    let url = database_url.to_owned();
    tokio::task::spawn_blocking(move || run_pending_migrations(&url))
        .await
        .wrap_err("migration task aborted")??;

    let pool = DbPool::new(PoolConfig::new(database_url).with_max_size(max_connections)).await?;
    info!(max_connections, "database pool ready");
    Ok(pool)
}
