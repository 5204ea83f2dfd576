mod config;
mod signal;

use migration::MigratorTrait;
use sea_orm::Database;
use sitewatch_config::constants;
use sitewatch_retention::CleanupOrchestrator;
use sitewatch_store::Store;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| anyhow::anyhow!("DATABASE_URL must be set"))?;

    let db = Database::connect(&database_url).await?;

    // Run migrations
    migration::Migrator::up(&db, None).await?;

    let store = Store::new(db);

    tracing::info!("Database migrations complete");

    let retention_config = config::load_retention_config().await?;
    let registry = Arc::new(config::create_policy_registry(&store, &retention_config)?);
    let orchestrator = Arc::new(CleanupOrchestrator::new(registry));
    let cleanup_interval = config::cleanup_interval(&retention_config)?;

    // Collections may have grown well past their limits while we were down
    orchestrator.normalize_on_startup().await;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let cleanup_handle = tokio::spawn(sitewatch_retention::run_cleanup_job(
        orchestrator.clone(),
        cleanup_interval,
        shutdown_rx,
    ));

    let api_host = std::env::var("API_HOST").unwrap_or_else(|_| constants::DEFAULT_API_HOST.into());
    let api_port = std::env::var("API_PORT").unwrap_or_else(|_| constants::DEFAULT_API_PORT.into());
    let api_addr = format!("{api_host}:{api_port}");

    let api_router = sitewatch_api::router(orchestrator);

    tracing::info!("Starting API server on {api_addr}");
    let listener = TcpListener::bind(&api_addr).await?;
    if let Err(e) = axum::serve(listener, api_router)
        .with_graceful_shutdown(signal::shutdown_signal())
        .await
    {
        tracing::error!("API server failed: {}", e);
    }

    let _ = shutdown_tx.send(true);

    tokio::select! {
        _ = tokio::time::sleep(constants::SHUTDOWN_TIMEOUT) => {
            tracing::warn!("Shutdown timeout reached, forcing exit");
        }
        _ = cleanup_handle => {
            tracing::info!("All components shut down gracefully");
        }
    }

    tracing::info!("Sitewatch shutdown complete");

    Ok(())
}
