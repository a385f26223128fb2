//! Migration: Create offers table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Offers::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Offers::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Offers::Title).string().not_null())
                    .col(ColumnDef::new(Offers::Description).text().not_null())
                    .col(
                        ColumnDef::new(Offers::DiscountType)
                            .string()
                            .not_null()
                            .check(Expr::col(Offers::DiscountType).is_in(["percentage", "flat"])),
                    )
                    .col(ColumnDef::new(Offers::DiscountValue).double().not_null())
                    .col(
                        ColumnDef::new(Offers::ApplicableProducts)
                            .array(ColumnType::Uuid)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Offers::ApplicableCategories)
                            .array(ColumnType::Uuid)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Offers::StartDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Offers::EndDate)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Offers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Offers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Offers::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Offers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Offers {
    Table,
    Id,
    Title,
    Description,
    DiscountType,
    DiscountValue,
    ApplicableProducts,
    ApplicableCategories,
    StartDate,
    EndDate,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
