use std::sync::Arc;

use anyhow::Context;
use aurora_server::{router, AppState, ServerConfig};
use clap::Parser;
use tracing::info;
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Aurora narrative server");
    let generator = config
        .build_generator()
        .context("failed to load phrase bank")?;
    match config.phrase_bank {
        Some(ref path) => info!("Phrase bank: {}", path.display()),
        None => info!("Phrase bank: built-in"),
    }

    let app = router(Arc::new(AppState { generator }));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("failed to bind {}", bind_address))?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
