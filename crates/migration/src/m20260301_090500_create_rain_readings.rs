use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RainReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(RainReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(RainReadings::DeviceId).text().not_null())
                    .col(ColumnDef::new(RainReadings::Millimeters).double().not_null())
                    .col(
                        ColumnDef::new(RainReadings::CreatedAt)
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
                    .name("idx_rain_readings_created_at")
                    .table(RainReadings::Table)
                    .col(RainReadings::CreatedAt)
                    .col(RainReadings::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_rain_readings_device")
                    .table(RainReadings::Table)
                    .col(RainReadings::DeviceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RainReadings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum RainReadings {
    Table,
    Id,
    DeviceId,
    Millimeters,
    CreatedAt,
}
