use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(NpkReadings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(NpkReadings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(NpkReadings::DeviceId).text().not_null())
                    .col(ColumnDef::new(NpkReadings::Nitrogen).double().not_null())
                    .col(ColumnDef::new(NpkReadings::Phosphorus).double().not_null())
                    .col(ColumnDef::new(NpkReadings::Potassium).double().not_null())
                    .col(
                        ColumnDef::new(NpkReadings::CreatedAt)
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
                    .name("idx_npk_readings_created_at")
                    .table(NpkReadings::Table)
                    .col(NpkReadings::CreatedAt)
                    .col(NpkReadings::Id)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_npk_readings_device")
                    .table(NpkReadings::Table)
                    .col(NpkReadings::DeviceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(NpkReadings::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum NpkReadings {
    Table,
    Id,
    DeviceId,
    Nitrogen,
    Phosphorus,
    Potassium,
    CreatedAt,
}
