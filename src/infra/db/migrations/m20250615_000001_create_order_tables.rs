//! Migration: Create cart, order, and invoice tables.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

/// Table and column identifiers for UserCarts
#[derive(Iden)]
enum UserCarts {
    Table,
    UserId,
    Items,
    UpdatedAt,
}

#[derive(Iden)]
enum Orders {
    Table,
}

#[derive(Iden)]
enum Invoices {
    Table,
}

/// Column identifiers shared by the orders and invoices tables
#[derive(Iden)]
enum OrderColumns {
    Id,
    UserId,
    Name,
    RestaurantName,
    Items,
    Subtotal,
    Tax,
    TotalPrice,
    Email,
    Phone,
    Address,
    OrderStatus,
    IsBillPaid,
    Source,
    CreatedAt,
    UpdatedAt,
}

/// Orders and invoices share the same column set; invoices are
/// write-only copies of the order payload.
fn order_shaped_table<T: Iden + 'static>(table: T) -> TableCreateStatement {
    Table::create()
        .table(table)
        .if_not_exists()
        .col(
            ColumnDef::new(OrderColumns::Id)
                .string()
                .not_null()
                .primary_key(),
        )
        .col(ColumnDef::new(OrderColumns::UserId).string().not_null())
        .col(ColumnDef::new(OrderColumns::Name).string().not_null())
        .col(ColumnDef::new(OrderColumns::RestaurantName).string().not_null())
        .col(ColumnDef::new(OrderColumns::Items).json().not_null())
        .col(
            ColumnDef::new(OrderColumns::Subtotal)
                .decimal_len(10, 2)
                .not_null(),
        )
        .col(
            ColumnDef::new(OrderColumns::Tax)
                .decimal_len(10, 2)
                .not_null(),
        )
        .col(
            ColumnDef::new(OrderColumns::TotalPrice)
                .decimal_len(10, 2)
                .not_null(),
        )
        .col(ColumnDef::new(OrderColumns::Email).string().not_null())
        .col(ColumnDef::new(OrderColumns::Phone).string().not_null())
        .col(ColumnDef::new(OrderColumns::Address).string().not_null())
        .col(ColumnDef::new(OrderColumns::OrderStatus).string().not_null())
        .col(ColumnDef::new(OrderColumns::IsBillPaid).boolean().not_null())
        .col(ColumnDef::new(OrderColumns::Source).string().not_null())
        .col(
            ColumnDef::new(OrderColumns::CreatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .col(
            ColumnDef::new(OrderColumns::UpdatedAt)
                .timestamp_with_time_zone()
                .not_null()
                .default(Expr::current_timestamp()),
        )
        .to_owned()
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserCarts::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserCarts::UserId)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserCarts::Items).json().not_null())
                    .col(
                        ColumnDef::new(UserCarts::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager.create_table(order_shaped_table(Orders::Table)).await?;
        manager.create_table(order_shaped_table(Invoices::Table)).await?;

        // Order history is always fetched per user
        manager
            .create_index(
                Index::create()
                    .name("idx_orders_user_id")
                    .table(Orders::Table)
                    .col(OrderColumns::UserId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_invoices_user_id")
                    .table(Invoices::Table)
                    .col(OrderColumns::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Invoices::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Orders::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(UserCarts::Table).to_owned())
            .await
    }
}
