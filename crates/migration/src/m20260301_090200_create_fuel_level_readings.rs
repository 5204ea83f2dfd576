use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FuelLevelReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FuelLevelReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(FuelLevelReadings::DeviceId).text().not_null())
                    .col(ColumnDef::new(FuelLevelReadings::LevelPercent).double().not_null())
                    .col(
                        ColumnDef::new(FuelLevelReadings::CreatedAt)
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
                    .name("idx_fuel_level_readings_created_at")
                    .table(FuelLevelReadings::Table)
                    .col(FuelLevelReadings::CreatedAt)
                    .col(FuelLevelReadings::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_fuel_level_readings_device")
                    .table(FuelLevelReadings::Table)
                    .col(FuelLevelReadings::DeviceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FuelLevelReadings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FuelLevelReadings {
    Table,
    Id,
    DeviceId,
    LevelPercent,
    CreatedAt,
}
