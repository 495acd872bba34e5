//! Waste record database entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::Set;

use crate::domain::{WasteLine, WasteRecord};
use crate::errors::AppError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "wastage")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub restaurant_name: String,
    #[sea_orm(column_type = "Json")]
    pub items: Json,
    /// Inline data-URI photo; can run to megabytes, hence Text
    #[sea_orm(column_type = "Text", nullable)]
    pub photo: Option<String>,
    pub reason: String,
    pub created_at: DateTimeUtc,
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    /// Row for inserting `record`.
    pub fn from_record(record: &WasteRecord) -> Result<Self, AppError> {
        Ok(Self {
            id: Set(record.id.clone()),
            user_id: Set(record.user_id.clone()),
            name: Set(record.name.clone()),
            restaurant_name: Set(record.restaurant_name.clone()),
            items: Set(serde_json::to_value(&record.items)?),
            photo: Set(record.photo.clone()),
            reason: Set(record.reason.clone()),
            created_at: Set(record.created_at),
            status: Set(record.status.clone()),
        })
    }
}

/// Convert database model to domain record, decoding the line array
impl TryFrom<Model> for WasteRecord {
    type Error = AppError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let items: Vec<WasteLine> = serde_json::from_value(model.items)?;
        Ok(WasteRecord {
            id: model.id,
            user_id: model.user_id,
            name: model.name,
            restaurant_name: model.restaurant_name,
            items,
            photo: model.photo,
            reason: model.reason,
            created_at: model.created_at,
            status: model.status,
        })
    }
}
