use async_trait::async_trait;
use sitewatch_store::{RecordId, RecordStore, StoreError};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory time-ordered table. Rows are `(id, created_at)` pairs.
pub struct MemoryStore {
    rows: Mutex<Vec<(RecordId, i64)>>,
    failing: bool,
    delete_calls: AtomicUsize,
}

impl MemoryStore {
    /// `len` rows with ascending timestamps, ids `1..=len`.
    pub fn with_rows(len: usize) -> Self {
        Self::from_timestamps((0..len as i64).collect())
    }

    /// One row per timestamp, ids assigned in insertion order starting at 1.
    pub fn from_timestamps(timestamps: Vec<i64>) -> Self {
        let rows = timestamps
            .into_iter()
            .enumerate()
            .map(|(i, ts)| (i as RecordId + 1, ts))
            .collect();

        Self {
            rows: Mutex::new(rows),
            failing: false,
            delete_calls: AtomicUsize::new(0),
        }
    }

    /// A store whose every call fails.
    pub fn failing(len: usize) -> Self {
        Self {
            failing: true,
            ..Self::with_rows(len)
        }
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn ids(&self) -> Vec<RecordId> {
        self.rows.lock().unwrap().iter().map(|(id, _)| *id).collect()
    }

    pub fn insert(&self, created_at: i64) -> RecordId {
        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|(id, _)| *id).max().unwrap_or(0) + 1;
        rows.push((id, created_at));
        id
    }

    pub fn deletes(&self) -> usize {
        self.delete_calls.load(Ordering::SeqCst)
    }

    fn check(&self) -> sitewatch_store::Result<()> {
        if self.failing {
            return Err(StoreError::Database(sea_orm::DbErr::Custom(
                "connection refused".to_string(),
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn count(&self) -> sitewatch_store::Result<u64> {
        self.check()?;
        Ok(self.len() as u64)
    }

    async fn oldest_ids(&self, limit: u64) -> sitewatch_store::Result<Vec<RecordId>> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by_key(|(id, ts)| (*ts, *id));
        Ok(rows
            .into_iter()
            .take(limit as usize)
            .map(|(id, _)| id)
            .collect())
    }

    async fn delete_by_ids(&self, ids: &[RecordId]) -> sitewatch_store::Result<u64> {
        self.check()?;
        self.delete_calls.fetch_add(1, Ordering::SeqCst);
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|(id, _)| !ids.contains(id));
        Ok((before - rows.len()) as u64)
    }
}
