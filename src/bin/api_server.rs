// src/bin/api_server.rs

use farm2home_api::infra::{config, logging};
use farm2home_api::transport;
use farm2home_api::DatabaseService;
use std::sync::Arc;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    logging::init();

    // --- Store Initialization ---
    info!("initializing DatabaseService");
    let db_service = DatabaseService::new().await?;
    let app_state = transport::http::AppState::new(Arc::new(db_service.store()));

    // --- API Server Initialization ---
    let bind_addr = config::bind_addr();
    let app = transport::http::create_app(app_state);
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!("API server listening on http://{}", bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shutdown signal received, closing store");
    db_service.close().await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for Ctrl+C: {}", e);
        // Without a signal handler the server runs until killed.
        std::future::pending::<()>().await;
    }
}
