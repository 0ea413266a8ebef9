use axum::Server;
use config::Config;
use std::net::SocketAddr;

mod api;
mod config;
mod db;
mod errors;
mod logging;
mod schema;
mod services;
mod validation;

/// Result type for API
pub type Result<T> = std::result::Result<T, errors::ApiError>;

const DB_POOL_SIZE: usize = 20;

/// Static configuration instance for the API
static CONFIG: once_cell::sync::Lazy<Config> = once_cell::sync::Lazy::new(|| {
    dotenv::dotenv().ok();
    envy::from_env::<Config>().expect("Failed to load configuration")
});

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::setup_logging(&CONFIG.log_dir)?;

    // Postgres pool and lazily opened Redis connection
    let db_client = db::DbClient::with_config(
        &CONFIG.database_url,
        &CONFIG.redis_url,
        DB_POOL_SIZE,
        CONFIG.catalog_cache_ttl_seconds,
    )?;

    let app = api::initialize_router(db_client);
    let addr = SocketAddr::from(([0, 0, 0, 0], CONFIG.port));
    tracing::info!("Server starting on {}", addr);

    Server::bind(&addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}
