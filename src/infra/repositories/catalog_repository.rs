//! Catalog repository implementation.
//!
//! Read-only access to categories and items; catalog writes happen
//! outside this application.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::inventory_category::Entity as CategoryEntity;
use super::entities::inventory_item::{self, Entity as ItemEntity};
use crate::domain::{Category, Item};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Catalog repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All categories, in store order
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Find a single category by document id
    async fn find_category_by_id(&self, id: &str) -> AppResult<Option<Category>>;

    /// All items belonging to a category
    async fn list_items_by_category(&self, category_id: &str) -> AppResult<Vec<Item>>;
}

/// Concrete implementation of CatalogRepository
pub struct CatalogStore {
    db: DatabaseConnection,
}

impl CatalogStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CatalogRepository for CatalogStore {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        let models = CategoryEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Category::from).collect())
    }

    async fn find_category_by_id(&self, id: &str) -> AppResult<Option<Category>> {
        let result = CategoryEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Category::from))
    }

    async fn list_items_by_category(&self, category_id: &str) -> AppResult<Vec<Item>> {
        let models = ItemEntity::find()
            .filter(inventory_item::Column::CategoryId.eq(category_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Item::from).collect())
    }
}
