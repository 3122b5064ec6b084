use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use product_catalog::modules::products::adapters::outbound::products_in_memory::InMemoryProducts;
use product_catalog::shell::config::AppConfig;
use product_catalog::shell::http::router;
use product_catalog::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::load()?;
    tracing::debug!(?config, "configuration loaded");

    let products = if config.catalog.seed {
        InMemoryProducts::seeded()
    } else {
        InMemoryProducts::new()
    };
    let state = AppState::new(Arc::new(products), config.catalog.default_limit);
    let app = router(state);

    let addr = config.server_address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Product API: http://{}/products", addr);
    tracing::info!("GraphQL endpoint: http://{}/graphql", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("shutting down");
}
