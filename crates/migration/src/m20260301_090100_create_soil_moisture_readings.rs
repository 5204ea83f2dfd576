use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SoilMoistureReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SoilMoistureReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SoilMoistureReadings::DeviceId).text().not_null())
                    .col(ColumnDef::new(SoilMoistureReadings::MoisturePercent).double().not_null())
                    .col(
                        ColumnDef::new(SoilMoistureReadings::CreatedAt)
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
                    .name("idx_soil_moisture_readings_created_at")
                    .table(SoilMoistureReadings::Table)
                    .col(SoilMoistureReadings::CreatedAt)
                    .col(SoilMoistureReadings::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_soil_moisture_readings_device")
                    .table(SoilMoistureReadings::Table)
                    .col(SoilMoistureReadings::DeviceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SoilMoistureReadings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SoilMoistureReadings {
    Table,
    Id,
    DeviceId,
    MoisturePercent,
    CreatedAt,
}
