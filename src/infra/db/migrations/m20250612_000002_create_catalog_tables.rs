//! Migration: Create inventory category and item tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Table and column identifiers for InventoryCategories
#[derive(Iden)]
enum InventoryCategories {
    Table,
    Id,
    Name,
    Image,
    CreatedAt,
    UpdatedAt,
}

/// Table and column identifiers for InventoryItems
#[derive(Iden)]
enum InventoryItems {
    Table,
    Id,
    CategoryId,
    Title,
    ItemType,
    UnitPrice,
    Units,
    HasVat,
    AvailableQuantity,
    Image,
    CreatedAt,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(InventoryCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryCategories::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InventoryCategories::Name).string().not_null())
                    .col(ColumnDef::new(InventoryCategories::Image).text().null())
                    .col(
                        ColumnDef::new(InventoryCategories::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(InventoryCategories::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(InventoryItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(InventoryItems::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(InventoryItems::CategoryId).string().not_null())
                    .col(ColumnDef::new(InventoryItems::Title).string().not_null())
                    .col(ColumnDef::new(InventoryItems::ItemType).string().null())
                    .col(
                        ColumnDef::new(InventoryItems::UnitPrice)
                            .decimal_len(10, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(InventoryItems::Units).string().not_null())
                    .col(
                        ColumnDef::new(InventoryItems::HasVat)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::AvailableQuantity)
                            .integer()
                            .not_null()
                            .default(0),
                    )
                    .col(ColumnDef::new(InventoryItems::Image).text().null())
                    .col(
                        ColumnDef::new(InventoryItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(InventoryItems::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Items are always fetched per category
        manager
            .create_index(
                Index::create()
                    .name("idx_inventory_items_category_id")
                    .table(InventoryItems::Table)
                    .col(InventoryItems::CategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(InventoryItems::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(InventoryCategories::Table).to_owned())
            .await
    }
}
