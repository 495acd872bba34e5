//! Stored cart database entity for SeaORM.
//!
//! One row per user; `items` holds the full line array as a JSON
//! document, replaced wholesale on every sync.

use sea_orm::entity::prelude::*;

use crate::domain::{CartLine, CartRecord};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "user_carts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,
    #[sea_orm(column_type = "Json")]
    pub items: Json,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain record, decoding the line array
impl TryFrom<Model> for CartRecord {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let items: Vec<CartLine> = serde_json::from_value(model.items)?;
        Ok(CartRecord {
            user_id: model.user_id,
            items,
            updated_at: Some(model.updated_at),
        })
    }
}
