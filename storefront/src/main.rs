use axum::Server;
use config::Config;
use std::{net::SocketAddr, sync::Arc};

mod client;
mod config;
mod errors;
mod forms;
mod logging;
mod models;
mod pages;
mod routes;
mod shop;
mod whatsapp;

/// Result type for the storefront
pub type Result<T> = std::result::Result<T, errors::StorefrontError>;

/// Static configuration instance for the storefront
static CONFIG: once_cell::sync::Lazy<Config> = once_cell::sync::Lazy::new(|| {
    dotenv::dotenv().ok();
    envy::from_env::<Config>().expect("Failed to load configuration")
});

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::setup_logging(&CONFIG.log_dir)?;

    let client = Arc::new(client::ApiClient::new(&CONFIG.backend_url));
    let state = routes::AppState {
        catalog: client.clone(),
        sink: client,
        whatsapp: Arc::new(whatsapp::WhatsApp::new(&CONFIG.whatsapp_number)?),
    };

    let app = routes::router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], CONFIG.port));
    tracing::info!("Storefront starting on {} (API at {})", addr, CONFIG.backend_url);

    Server::bind(&addr)
        .serve(app.into_make_service_with_connect_info::<SocketAddr>())
        .await?;

    Ok(())
}
