use std::net::SocketAddr;
use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use product_catalog::{AppState, Config, ProductStore, build_router, metrics, utils};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!(
        "Starting Product Catalog API v{}",
        env!("CARGO_PKG_VERSION")
    );

    match run().await {
        Ok(()) => ExitCode::from(exitcode::OK as u8),
        Err(exit_code) => ExitCode::from(exit_code as u8),
    }
}

/// Run the application, returning an exit code on error.
async fn run() -> Result<(), exitcode::ExitCode> {
    let config = Config::from_env().map_err(|e| {
        error!("Configuration error: {e}");
        exitcode::CONFIG
    })?;
    info!(
        host = %config.host,
        port = %config.port,
        metrics_port = config.metrics_port,
        "Configuration loaded"
    );
    if config.uses_default_api_key() {
        warn!("API_KEY not set, mutating endpoints accept the placeholder key");
    }

    if let Some(metrics_addr) = config.metrics_addr() {
        metrics::try_init_metrics(metrics_addr);
    }

    let store = ProductStore::seeded();
    metrics::set_products_stored(store.len().await);
    info!(products = store.len().await, "Catalog seeded");

    let addr: SocketAddr = config.server_addr().parse().map_err(|e| {
        error!("Invalid server address: {e}");
        exitcode::CONFIG
    })?;

    let app = build_router(AppState::new(store, config));

    let listener = TcpListener::bind(addr).await.map_err(|e| {
        error!("Failed to bind to {addr}: {e}");
        exitcode::UNAVAILABLE
    })?;

    info!("Server listening on http://{addr}");
    info!("API endpoints:");
    info!("  GET    /                   - Endpoint directory");
    info!("  GET    /health             - Health check");
    info!("  GET    /api/products       - List products");
    info!("  GET    /api/products/{{id}}  - Get product");
    info!("  POST   /api/products       - Create product (x-api-key)");
    info!("  PUT    /api/products/{{id}}  - Replace product (x-api-key)");
    info!("  DELETE /api/products/{{id}}  - Delete product (x-api-key)");

    axum::serve(listener, app)
        .with_graceful_shutdown(utils::shutdown_signal())
        .await
        .map_err(|e| {
            error!("Server error: {e}");
            exitcode::SOFTWARE
        })?;

    info!("Server shutdown complete");
    Ok(())
}
