use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TemperatureReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TemperatureReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(TemperatureReadings::DeviceId).text().not_null())
                    .col(ColumnDef::new(TemperatureReadings::Celsius).double().not_null())
                    .col(ColumnDef::new(TemperatureReadings::HumidityPercent).double())
                    .col(
                        ColumnDef::new(TemperatureReadings::CreatedAt)
                            .timestamp()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_temperature_readings_created_at")
                    .table(TemperatureReadings::Table)
                    .col(TemperatureReadings::CreatedAt)
                    .col(TemperatureReadings::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_temperature_readings_device")
                    .table(TemperatureReadings::Table)
                    .col(TemperatureReadings::DeviceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TemperatureReadings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum TemperatureReadings {
    Table,
    Id,
    DeviceId,
    Celsius,
    HumidityPercent,
    CreatedAt,
}
