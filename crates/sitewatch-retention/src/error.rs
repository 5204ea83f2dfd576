use thiserror::Error;

#[derive(Error, Debug)]
pub enum RetentionError {
    #[error(transparent)]
    Store(#[from] sitewatch_store::StoreError),

    #[error("collection not found: {0}")]
    CollectionNotFound(String),

    #[error("invalid retention policy: {0}")]
    InvalidPolicy(String),

    #[error("collection registered twice: {0}")]
    DuplicateCollection(String),
}

pub type Result<T> = std::result::Result<T, RetentionError>;
