use anyhow::{anyhow, Context};
use heart_server::config::ServerConfig;
use heart_server::stream::{router, AppState};
use heart_shared::PointSet;
use std::sync::Arc;
use tokio::sync::watch;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::default();

    // Validate configuration before starting
    config
        .validate()
        .map_err(|e| anyhow!("invalid server configuration: {}", e))?;

    let points = Arc::new(PointSet::generate());
    tracing::info!(points = points.as_slice().len(), "Generated heart point cloud");

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let app = router(AppState::new(points, &config, shutdown_rx));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;

    tracing::info!("Starting rotating heart server on {}", config.listen_addr);
    println!("Rotating heart server listening on {}", config.listen_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for Ctrl-C: {}", e);
                std::future::pending::<()>().await;
            }
            tracing::info!("Shutdown requested");
            let _ = shutdown_tx.send(true);
        })
        .await
        .context("server error")?;

    tracing::info!("Server stopped");
    Ok(())
}
