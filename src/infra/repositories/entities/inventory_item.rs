//! Inventory item database entity for SeaORM.

use rust_decimal::Decimal;
use sea_orm::entity::prelude::*;

use crate::domain::Item;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "inventory_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub category_id: String,
    pub title: String,
    pub item_type: Option<String>,
    #[sea_orm(column_type = "Decimal(Some((10, 2)))")]
    pub unit_price: Decimal,
    pub units: String,
    pub has_vat: bool,
    pub available_quantity: i32,
    pub image: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Item {
    fn from(model: Model) -> Self {
        Item {
            id: model.id,
            category_id: model.category_id,
            title: model.title,
            item_type: model.item_type,
            unit_price: model.unit_price,
            units: model.units,
            has_vat: model.has_vat,
            available_quantity: model.available_quantity,
            image: model.image,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
