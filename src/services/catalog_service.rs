//! Catalog service - Read access to categories and items.
//!
//! SOLID (SRP): Handles catalog reads only; catalog writes happen
//! outside this application.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Category, Item};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UnitOfWork;

/// Catalog service trait for dependency injection.
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// List all categories
    async fn list_categories(&self) -> AppResult<Vec<Category>>;

    /// Get a single category by id
    async fn get_category(&self, id: &str) -> AppResult<Category>;

    /// List the items of a category; an unknown category yields an
    /// empty list, not an error
    async fn list_items(&self, category_id: &str) -> AppResult<Vec<Item>>;
}

/// Concrete implementation of CatalogService using Unit of Work.
pub struct CatalogReader<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CatalogReader<U> {
    /// Create new catalog service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CatalogService for CatalogReader<U> {
    async fn list_categories(&self) -> AppResult<Vec<Category>> {
        self.uow.catalog().list_categories().await
    }

    async fn get_category(&self, id: &str) -> AppResult<Category> {
        self.uow
            .catalog()
            .find_category_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn list_items(&self, category_id: &str) -> AppResult<Vec<Item>> {
        self.uow.catalog().list_items_by_category(category_id).await
    }
}
