use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("unknown telemetry table: {0}")]
    UnknownTable(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
