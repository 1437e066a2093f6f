//! Service entry-point: configuration, record-store startup wait, schema
//! bootstrap, and HTTP serving.

use std::io;
use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use user_api::inbound::http::HealthState;
use user_api::outbound::persistence::{
    DbPool, DieselUserRepository, PoolConfig, bootstrap_schema, wait_for_database,
};
use user_api::server::{ServerConfig, run};
use user_api::settings::ServiceSettings;

/// Application bootstrap.
#[actix_web::main]
async fn main() -> io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServiceSettings::load().map_err(io::Error::other)?;
    let database_url = settings.database_url().map_err(io::Error::other)?.to_owned();

    let pool = DbPool::new(PoolConfig::new(&database_url))
        .await
        .map_err(io::Error::other)?;
    wait_for_database(&pool, &settings.retry_policy())
        .await
        .map_err(io::Error::other)?;
    bootstrap_schema(&pool, settings.seed_sample_data)
        .await
        .map_err(io::Error::other)?;

    let health = web::Data::new(HealthState::new());
    let config = ServerConfig::new(
        settings.host.clone(),
        settings.port,
        Arc::new(DieselUserRepository::new(pool)),
    );

    info!(host = %settings.host, port = settings.port, "starting HTTP server");
    let server = run(config, health.clone())?;
    health.mark_ready();
    server.await
}
