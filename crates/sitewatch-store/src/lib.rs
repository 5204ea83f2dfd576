pub mod error;
pub mod record_store;
pub mod tables;

pub use error::{Result, StoreError};
pub use record_store::{ReadingTable, RecordId, RecordStore, TimeSeriesEntity};
pub use tables::TelemetryTable;

use ::entity::prelude::*;
use sea_orm::DatabaseConnection;
use std::sync::Arc;

pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }

    /// Returns the retention accessor for a single telemetry table.
    ///
    /// The accessor holds its own clone of the connection pool, so it can
    /// outlive the borrow of `self` and be shared across tasks.
    pub fn record_store(&self, table: TelemetryTable) -> Arc<dyn RecordStore> {
        let db = self.db.clone();
        match table {
            TelemetryTable::Temperature => Arc::new(ReadingTable::<TemperatureReadings>::new(db)),
            TelemetryTable::SoilMoisture => {
                Arc::new(ReadingTable::<SoilMoistureReadings>::new(db))
            }
            TelemetryTable::FuelLevel => Arc::new(ReadingTable::<FuelLevelReadings>::new(db)),
            TelemetryTable::Npk => Arc::new(ReadingTable::<NpkReadings>::new(db)),
            TelemetryTable::Gas => Arc::new(ReadingTable::<GasReadings>::new(db)),
            TelemetryTable::Rain => Arc::new(ReadingTable::<RainReadings>::new(db)),
        }
    }

    pub fn record_stores(&self) -> Vec<(TelemetryTable, Arc<dyn RecordStore>)> {
        TelemetryTable::ALL
            .iter()
            .map(|table| (*table, self.record_store(*table)))
            .collect()
    }
}
