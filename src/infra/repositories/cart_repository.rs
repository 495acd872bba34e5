//! Cart repository implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};

use super::entities::user_cart::{ActiveModel, Entity as CartEntity};
use crate::domain::{CartLine, CartRecord};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Cart repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Find the stored cart for a user; `None` when never saved
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<CartRecord>>;

    /// Replace the stored line array for a user, inserting the row if
    /// absent. Only `items` and `updated_at` are written.
    async fn upsert_items(&self, user_id: &str, items: Vec<CartLine>) -> AppResult<()>;
}

/// Concrete implementation of CartRepository
pub struct CartStore {
    db: DatabaseConnection,
}

impl CartStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CartRepository for CartStore {
    async fn find_by_user(&self, user_id: &str) -> AppResult<Option<CartRecord>> {
        let result = CartEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(CartRecord::try_from).transpose()
    }

    async fn upsert_items(&self, user_id: &str, items: Vec<CartLine>) -> AppResult<()> {
        let items = serde_json::to_value(&items)?;
        let now = chrono::Utc::now();

        let existing = CartEntity::find_by_id(user_id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        match existing {
            Some(model) => {
                // Merge write: untouched columns stay as stored
                let mut active: ActiveModel = model.into();
                active.items = Set(items);
                active.updated_at = Set(now);
                active.update(&self.db).await.map_err(AppError::from)?;
            }
            None => {
                let active = ActiveModel {
                    user_id: Set(user_id.to_string()),
                    items: Set(items),
                    updated_at: Set(now),
                };
                active.insert(&self.db).await.map_err(AppError::from)?;
            }
        }

        Ok(())
    }
}
