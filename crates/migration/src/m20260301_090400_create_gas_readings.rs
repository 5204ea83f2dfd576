use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GasReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GasReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(GasReadings::DeviceId).text().not_null())
                    .col(ColumnDef::new(GasReadings::Ppm).double().not_null())
                    .col(
                        ColumnDef::new(GasReadings::CreatedAt)
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
                    .name("idx_gas_readings_created_at")
                    .table(GasReadings::Table)
                    .col(GasReadings::CreatedAt)
                    .col(GasReadings::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_gas_readings_device")
                    .table(GasReadings::Table)
                    .col(GasReadings::DeviceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GasReadings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum GasReadings {
    Table,
    Id,
    DeviceId,
    Ppm,
    CreatedAt,
}
