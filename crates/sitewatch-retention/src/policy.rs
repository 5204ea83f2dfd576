use crate::{Result, RetentionError};

/// Watermark and batch size for one collection.
///
/// Both values are positive and `delete_count <= max_records`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    max_records: u64,
    delete_count: u64,
}

impl RetentionPolicy {
    pub fn new(max_records: u64, delete_count: u64) -> Result<Self> {
        if max_records == 0 {
            return Err(RetentionError::InvalidPolicy(
                "maxRecords must be greater than 0".to_string(),
            ));
        }

        if delete_count == 0 {
            return Err(RetentionError::InvalidPolicy(
                "deleteCount must be greater than 0".to_string(),
            ));
        }

        if delete_count > max_records {
            return Err(RetentionError::InvalidPolicy(format!(
                "deleteCount ({delete_count}) must not exceed maxRecords ({max_records})"
            )));
        }

        Ok(Self {
            max_records,
            delete_count,
        })
    }

    pub fn max_records(&self) -> u64 {
        self.max_records
    }

    pub fn delete_count(&self) -> u64 {
        self.delete_count
    }

    /// Applies a partial update, validating the merged result.
    pub fn apply(&self, update: &PolicyUpdate) -> Result<Self> {
        Self::new(
            update.max_records.unwrap_or(self.max_records),
            update.delete_count.unwrap_or(self.delete_count),
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PolicyUpdate {
    pub max_records: Option<u64>,
    pub delete_count: Option<u64>,
}
