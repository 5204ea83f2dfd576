use crate::CleanupOrchestrator;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tracing::info;

/// Periodically runs routine cleanup until `shutdown` flips to `true`.
pub async fn run_cleanup_job(
    orchestrator: Arc<CleanupOrchestrator>,
    period: Duration,
    mut shutdown: watch::Receiver<bool>,
) {
    info!("Starting retention cleanup job (every {:?})", period);

    let mut interval = tokio::time::interval(period);

    loop {
        tokio::select! {
            _ = interval.tick() => {}
            changed = shutdown.changed() => {
                if changed.is_err() || *shutdown.borrow() {
                    break;
                }
                continue;
            }
        }

        info!("Running routine retention cleanup");

        orchestrator.cleanup_all_collections().await.log_summary();
    }

    info!("Retention cleanup job shutting down");
}
