//! Order database entity for SeaORM.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{Order, OrderLine};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "orders")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub restaurant_name: String,
    #[sea_orm(column_type = "Json")]
    pub items: Json,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub subtotal: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub tax: Decimal,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub total_price: Decimal,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub order_status: String,
    pub is_bill_paid: bool,
    pub source: String,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Row for inserting `order` under primary key `id`.
    pub fn from_order(order: &Order, id: String) -> Result<Self, AppError> {
        Ok(Self {
            id: Set(id),
            user_id: Set(order.user_id.clone()),
            name: Set(order.name.clone()),
            restaurant_name: Set(order.restaurant_name.clone()),
            items: Set(serde_json::to_value(&order.items)?),
            subtotal: Set(order.subtotal),
            tax: Set(order.tax),
            total_price: Set(order.total_price),
            email: Set(order.email.clone()),
            phone: Set(order.phone.clone()),
            address: Set(order.address.clone()),
            order_status: Set(order.order_status.clone()),
            is_bill_paid: Set(order.is_bill_paid),
            source: Set(order.source.clone()),
            created_at: Set(order.created_at),
            updated_at: Set(order.updated_at),
        })
    }
}

/// Convert database model to domain entity, decoding the line array
impl TryFrom<Model> for Order {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let items: Vec<OrderLine> = serde_json::from_value(model.items)?;
        Ok(Order {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            restaurant_name: model.restaurant_name,
            items,
            subtotal: model.subtotal,
            tax: model.tax,
            total_price: model.total_price,
            email: model.email,
            phone: model.phone,
            address: model.address,
            order_status: model.order_status,
            is_bill_paid: model.is_bill_paid,
            source: model.source,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
