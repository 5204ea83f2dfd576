use crate::{PolicyUpdate, Result, RetentionError, RetentionPolicy};
use sitewatch_store::RecordStore;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;

/// A collection under retention: its key, display name, policy and store.
#[derive(Clone)]
pub struct RegisteredCollection {
    pub key: String,
    pub name: String,
    pub policy: RetentionPolicy,
    pub store: Arc<dyn RecordStore>,
}

impl RegisteredCollection {
    pub fn new(
        key: impl Into<String>,
        name: impl Into<String>,
        policy: RetentionPolicy,
        store: Arc<dyn RecordStore>,
    ) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            policy,
            store,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyView {
    pub collection: String,
    pub max_records: u64,
    pub delete_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeStatus {
    WithinLimit,
    ExceedsLimit,
}

impl SizeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeStatus::WithinLimit => "within limit",
            SizeStatus::ExceedsLimit => "exceeds limit",
        }
    }
}

impl std::fmt::Display for SizeStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSize {
    pub collection: String,
    pub count: u64,
    pub max_records: u64,
    pub status: SizeStatus,
}

/// The process-wide retention policy table.
///
/// Built once at startup and shared behind an `Arc`. Readers take a snapshot,
/// so the lock is never held while talking to a store.
pub struct PolicyRegistry {
    collections: RwLock<Vec<RegisteredCollection>>,
}

impl std::fmt::Debug for PolicyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PolicyRegistry").finish_non_exhaustive()
    }
}

impl PolicyRegistry {
    pub fn new(collections: Vec<RegisteredCollection>) -> Result<Self> {
        let mut seen = HashSet::new();
        for collection in &collections {
            if !seen.insert(collection.key.as_str()) {
                return Err(RetentionError::DuplicateCollection(
                    collection.key.clone(),
                ));
            }
        }

        Ok(Self {
            collections: RwLock::new(collections),
        })
    }

    pub async fn snapshot(&self) -> Vec<RegisteredCollection> {
        self.collections.read().await.clone()
    }

    pub async fn config(&self) -> BTreeMap<String, PolicyView> {
        self.collections
            .read()
            .await
            .iter()
            .map(|c| {
                (
                    c.key.clone(),
                    PolicyView {
                        collection: c.name.clone(),
                        max_records: c.policy.max_records(),
                        delete_count: c.policy.delete_count(),
                    },
                )
            })
            .collect()
    }

    /// Current row count of every collection against its watermark.
    pub async fn sizes(&self) -> Result<BTreeMap<String, CollectionSize>> {
        let mut sizes = BTreeMap::new();

        for collection in self.snapshot().await {
            let count = collection.store.count().await?;
            let max_records = collection.policy.max_records();
            let status = if count > max_records {
                SizeStatus::ExceedsLimit
            } else {
                SizeStatus::WithinLimit
            };

            sizes.insert(
                collection.key,
                CollectionSize {
                    collection: collection.name,
                    count,
                    max_records,
                    status,
                },
            );
        }

        Ok(sizes)
    }

    /// Updates the policy of the collection with the given display name.
    pub async fn update_policy(&self, name: &str, update: PolicyUpdate) -> Result<RetentionPolicy> {
        let mut collections = self.collections.write().await;

        let collection = collections
            .iter_mut()
            .find(|c| c.name == name)
            .ok_or_else(|| RetentionError::CollectionNotFound(name.to_string()))?;

        let policy = collection.policy.apply(&update)?;
        collection.policy = policy;

        info!(
            "Updated retention policy for {}: maxRecords={}, deleteCount={}",
            collection.name,
            policy.max_records(),
            policy.delete_count()
        );

        Ok(policy)
    }
}
