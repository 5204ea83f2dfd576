use crate::Result;
use async_trait::async_trait;
use sea_orm::*;
use std::marker::PhantomData;

pub type RecordId = i32;

// Keeps each DELETE under the bind parameter limits of SQLite and Postgres.
const DELETE_CHUNK_SIZE: usize = 500;

/// Retention-facing view of an append-mostly, time-ordered table.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn count(&self) -> Result<u64>;

    /// Ids of the `limit` oldest rows, ordered by creation time and then by id.
    async fn oldest_ids(&self, limit: u64) -> Result<Vec<RecordId>>;

    /// Deletes the given rows and returns how many were actually removed.
    /// Ids that no longer exist are ignored.
    async fn delete_by_ids(&self, ids: &[RecordId]) -> Result<u64>;
}

/// An entity with an integer primary key and a creation timestamp.
pub trait TimeSeriesEntity: EntityTrait {
    fn id_column() -> Self::Column;

    fn created_at_column() -> Self::Column;
}

macro_rules! time_series_entity {
    ($($module:ident),* $(,)?) => {
        $(
            impl TimeSeriesEntity for ::entity::$module::Entity {
                fn id_column() -> Self::Column {
                    ::entity::$module::Column::Id
                }

                fn created_at_column() -> Self::Column {
                    ::entity::$module::Column::CreatedAt
                }
            }
        )*
    };
}

time_series_entity!(
    temperature_readings,
    soil_moisture_readings,
    fuel_level_readings,
    npk_readings,
    gas_readings,
    rain_readings,
);

pub struct ReadingTable<E> {
    db: DatabaseConnection,
    _entity: PhantomData<fn() -> E>,
}

impl<E: TimeSeriesEntity> ReadingTable<E> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<E> RecordStore for ReadingTable<E>
where
    E: TimeSeriesEntity,
    E::Model: Send + Sync,
{
    async fn count(&self) -> Result<u64> {
        Ok(E::find().count(&self.db).await?)
    }

    async fn oldest_ids(&self, limit: u64) -> Result<Vec<RecordId>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        Ok(E::find()
            .select_only()
            .column(E::id_column())
            .order_by_asc(E::created_at_column())
            .order_by_asc(E::id_column())
            .limit(limit)
            .into_tuple::<RecordId>()
            .all(&self.db)
            .await?)
    }

    async fn delete_by_ids(&self, ids: &[RecordId]) -> Result<u64> {
        let mut deleted = 0;

        for chunk in ids.chunks(DELETE_CHUNK_SIZE) {
            deleted += E::delete_many()
                .filter(E::id_column().is_in(chunk.iter().copied()))
                .exec(&self.db)
                .await
                .map(|result| result.rows_affected)?;
        }

        Ok(deleted)
    }
}
