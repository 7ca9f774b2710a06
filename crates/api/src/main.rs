use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use maris_api::chat;
use maris_api::config::ServerConfig;
use maris_api::files::ObjectStore;
use maris_api::router::build_app_router;
use maris_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "maris_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url =
        std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = maris_db::create_pool(&database_url)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Database connection pool created");

    maris_db::health_check(&pool)
        .await
        .context("Database health check failed")?;

    maris_db::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    // --- Object store (optional) ---
    let store = ObjectStore::from_env().await.map(Arc::new);
    match &store {
        Some(_) => tracing::info!("Object store configured"),
        None => tracing::warn!("S3_BUCKET unset; images fall back to literal URLs"),
    }

    // --- Chat responder ---
    let (bot_tx, bot_rx) = mpsc::unbounded_channel();
    let responder_cancel = CancellationToken::new();
    let responder_handle =
        chat::responder::spawn(pool.clone(), bot_rx, responder_cancel.clone());
    tracing::info!("Chat responder started");

    // --- App state & router ---
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store,
        bot_queue: bot_tx,
    };
    let app = build_app_router(state, &config);

    // --- Serve ---
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    // Drain the responder before exiting.
    responder_cancel.cancel();
    let _ = responder_handle.await;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl-c");
    tracing::info!("Shutdown signal received");
}
