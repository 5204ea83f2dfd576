use crate::Result;
use sitewatch_store::RecordStore;
use tracing::{debug, error, info};

/// Trims one collection back under its watermark, oldest rows first.
///
/// Nothing is deleted while `count <= max_records`. Once over, at least
/// `delete_count` rows go, and always enough to land at or below the
/// watermark. Victims are selected by id before deleting, so rows inserted
/// after the snapshot are never removed.
///
/// Returns the number of rows the store reports as deleted, which can be
/// lower than requested if another pass removed some of them first.
pub async fn cleanup_collection(
    collection: &str,
    store: &dyn RecordStore,
    max_records: u64,
    delete_count: u64,
) -> Result<u64> {
    match trim(collection, store, max_records, delete_count).await {
        Ok(deleted) => Ok(deleted),
        Err(e) => {
            error!("Cleanup failed for collection {}: {}", collection, e);
            Err(e)
        }
    }
}

async fn trim(
    collection: &str,
    store: &dyn RecordStore,
    max_records: u64,
    delete_count: u64,
) -> Result<u64> {
    let count = store.count().await?;

    if count <= max_records {
        debug!(
            "Collection {} within limit ({}/{})",
            collection, count, max_records
        );
        return Ok(0);
    }

    let target = delete_count.max(count - max_records);
    let ids = store.oldest_ids(target).await?;

    if ids.is_empty() {
        return Ok(0);
    }

    debug!("Deleting ids from {}: {:?}", collection, ids);

    let deleted = store.delete_by_ids(&ids).await?;

    info!(
        "Cleaned up {} of {} requested record(s) from {} (count was {}, limit {})",
        deleted, target, collection, count, max_records
    );

    Ok(deleted)
}
