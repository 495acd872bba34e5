//! Migration: Create wastage table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Table and column identifiers for Wastage
#[derive(Iden)]
enum Wastage {
    Table,
    Id,
    UserId,
    Name,
    RestaurantName,
    Items,
    Photo,
    Reason,
    CreatedAt,
    Status,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Wastage::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Wastage::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Wastage::UserId).string().not_null())
                    .col(ColumnDef::new(Wastage::Name).string().not_null())
                    .col(ColumnDef::new(Wastage::RestaurantName).string().not_null())
                    .col(ColumnDef::new(Wastage::Items).json().not_null())
                    // Inline data-URI photos can run large
                    .col(ColumnDef::new(Wastage::Photo).text().null())
                    .col(ColumnDef::new(Wastage::Reason).string().not_null())
                    .col(
                        ColumnDef::new(Wastage::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Wastage::Status).string().not_null())
                    .to_owned(),
            )
            .await?;

        // Waste history is always fetched per user
        manager
            .create_index(
                Index::create()
                    .name("idx_wastage_user_id")
                    .table(Wastage::Table)
                    .col(Wastage::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Wastage::Table).to_owned())
            .await
    }
}
