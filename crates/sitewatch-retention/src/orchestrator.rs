use crate::{PolicyRegistry, RegisteredCollection, cleanup_collection};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanupMode {
    /// Configured batch size, triggered on schedule or on demand.
    Routine,
    /// Exact trim to the watermark for collections past 1.5x their limit.
    Aggressive,
}

impl CleanupMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CleanupMode::Routine => "routine",
            CleanupMode::Aggressive => "aggressive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionOutcome {
    Deleted(u64),
    /// Aggressive mode left the collection alone because it was under threshold.
    Skipped,
    Failed(String),
}

impl CollectionOutcome {
    /// Value reported to admin callers: the deleted count, `0` when skipped,
    /// `-1` on failure.
    pub fn reported_count(&self) -> i64 {
        match self {
            CollectionOutcome::Deleted(n) => i64::try_from(*n).unwrap_or(i64::MAX),
            CollectionOutcome::Skipped => 0,
            CollectionOutcome::Failed(_) => -1,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, CollectionOutcome::Failed(_))
    }
}

#[derive(Debug, Clone)]
pub struct CleanupReport {
    pub mode: CleanupMode,
    pub outcomes: BTreeMap<String, CollectionOutcome>,
}

impl CleanupReport {
    fn new(mode: CleanupMode) -> Self {
        Self {
            mode,
            outcomes: BTreeMap::new(),
        }
    }

    pub fn total_deleted(&self) -> u64 {
        self.outcomes
            .values()
            .map(|outcome| match outcome {
                CollectionOutcome::Deleted(n) => *n,
                _ => 0,
            })
            .sum()
    }

    pub fn failed(&self) -> Vec<&str> {
        self.outcomes
            .iter()
            .filter(|(_, outcome)| outcome.is_failure())
            .map(|(key, _)| key.as_str())
            .collect()
    }

    pub fn log_summary(&self) {
        let failed = self.failed();

        if failed.is_empty() {
            info!(
                "{} cleanup complete: {} record(s) deleted",
                self.mode.as_str(),
                self.total_deleted()
            );
        } else {
            warn!(
                "{} cleanup complete: {} record(s) deleted, failed collections: {}",
                self.mode.as_str(),
                self.total_deleted(),
                failed.join(", ")
            );
        }
    }
}

/// `count > max_records * 1.5`, in integer arithmetic.
fn exceeds_aggressive_threshold(count: u64, max_records: u64) -> bool {
    u128::from(count) * 2 > u128::from(max_records) * 3
}

/// Runs the cleanup engine across every registered collection.
///
/// Collections are processed one after another and independently: a failing
/// collection is recorded in the report and the run moves on.
pub struct CleanupOrchestrator {
    registry: Arc<PolicyRegistry>,
}

impl CleanupOrchestrator {
    pub fn new(registry: Arc<PolicyRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Arc<PolicyRegistry> {
        &self.registry
    }

    pub async fn cleanup_all_collections(&self) -> CleanupReport {
        let mut report = CleanupReport::new(CleanupMode::Routine);

        for collection in self.registry.snapshot().await {
            let outcome = match cleanup_collection(
                &collection.key,
                collection.store.as_ref(),
                collection.policy.max_records(),
                collection.policy.delete_count(),
            )
            .await
            {
                Ok(deleted) => CollectionOutcome::Deleted(deleted),
                Err(e) => CollectionOutcome::Failed(e.to_string()),
            };

            report.outcomes.insert(collection.key, outcome);
        }

        report
    }

    pub async fn check_for_large_collections(&self) -> CleanupReport {
        let mut report = CleanupReport::new(CleanupMode::Aggressive);

        for collection in self.registry.snapshot().await {
            let outcome = Self::trim_if_oversized(&collection).await;
            report.outcomes.insert(collection.key, outcome);
        }

        report
    }

    async fn trim_if_oversized(collection: &RegisteredCollection) -> CollectionOutcome {
        let max_records = collection.policy.max_records();

        let count = match collection.store.count().await {
            Ok(count) => count,
            Err(e) => {
                error!(
                    "Failed to count collection {} for aggressive cleanup: {}",
                    collection.key, e
                );
                return CollectionOutcome::Failed(e.to_string());
            }
        };

        if !exceeds_aggressive_threshold(count, max_records) {
            return CollectionOutcome::Skipped;
        }

        warn!(
            "Collection {} has {} records, more than 1.5x its limit of {}",
            collection.key, count, max_records
        );

        match cleanup_collection(
            &collection.key,
            collection.store.as_ref(),
            max_records,
            count - max_records,
        )
        .await
        {
            Ok(deleted) => CollectionOutcome::Deleted(deleted),
            Err(e) => CollectionOutcome::Failed(e.to_string()),
        }
    }

    /// Aggressive pass run once before serving, so collections that grew while
    /// the process was down are brought back to their watermark immediately.
    pub async fn normalize_on_startup(&self) -> CleanupReport {
        info!("Checking for oversized collections on startup");

        let report = self.check_for_large_collections().await;
        report.log_summary();
        report
    }
}
