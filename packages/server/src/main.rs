use anyhow::Context;
use tracing::info;

use bloglist_server::config::AppConfig;
use bloglist_server::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let config = AppConfig::load().context("Failed to load config")?;
    info!(backend = ?config.store.backend, "Opening blog store");

    let store = bloglist_server::connect_store(&config).await?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let state = AppState { store, config };
    let app = bloglist_server::build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Server running at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
}
