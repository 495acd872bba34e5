//! Waste repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::wastage::{self, ActiveModel, Entity as WastageEntity};
use crate::domain::WasteRecord;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Waste repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait WasteRepository: Send + Sync {
    /// Append a waste record
    async fn insert(&self, record: &WasteRecord) -> AppResult<()>;

    /// All waste records submitted by a user, unordered
    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<WasteRecord>>;
}

/// Concrete implementation of WasteRepository
pub struct WasteStore {
    db: DatabaseConnection,
}

impl WasteStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl WasteRepository for WasteStore {
    async fn insert(&self, record: &WasteRecord) -> AppResult<()> {
        let active = ActiveModel::from_record(record)?;
        active.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn list_by_user(&self, user_id: &str) -> AppResult<Vec<WasteRecord>> {
        let models = WastageEntity::find()
            .filter(wastage::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(WasteRecord::try_from).collect()
    }
}
