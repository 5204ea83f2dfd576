pub use sea_orm_migration::prelude::*;

mod m20260301_090000_create_temperature_readings;
mod m20260301_090100_create_soil_moisture_readings;
mod m20260301_090200_create_fuel_level_readings;
mod m20260301_090300_create_npk_readings;
mod m20260301_090400_create_gas_readings;
mod m20260301_090500_create_rain_readings;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_090000_create_temperature_readings::Migration),
            Box::new(m20260301_090100_create_soil_moisture_readings::Migration),
            Box::new(m20260301_090200_create_fuel_level_readings::Migration),
            Box::new(m20260301_090300_create_npk_readings::Migration),
            Box::new(m20260301_090400_create_gas_readings::Migration),
            Box::new(m20260301_090500_create_rain_readings::Migration),
        ]
    }
}
