//! Cart service - Stored cart reads and sync writes.
//!
//! SOLID (SRP): Handles cart persistence only; the in-memory aggregate
//! lives in the domain and the session drives it.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CartLine, CartRecord};
use crate::errors::AppResult;
use crate::infra::UnitOfWork;

/// Cart service trait for dependency injection.
#[async_trait]
pub trait CartService: Send + Sync {
    /// Fetch the stored cart for a user. A user who never synced a
    /// cart gets an empty record, not an error.
    async fn fetch_cart(&self, user_id: &str) -> AppResult<CartRecord>;

    /// Replace the stored line array for a user (merge write: only the
    /// items and the timestamp change).
    async fn save_cart(&self, user_id: &str, items: Vec<CartLine>) -> AppResult<()>;
}

/// Concrete implementation of CartService using Unit of Work.
pub struct CartManager<U: UnitOfWork> {
    uow: Arc<U>,
}

impl<U: UnitOfWork> CartManager<U> {
    /// Create new cart service instance with Unit of Work
    pub fn new(uow: Arc<U>) -> Self {
        Self { uow }
    }
}

#[async_trait]
impl<U: UnitOfWork> CartService for CartManager<U> {
    async fn fetch_cart(&self, user_id: &str) -> AppResult<CartRecord> {
        let record = self.uow.carts().find_by_user(user_id).await?;
        Ok(record.unwrap_or_else(|| CartRecord::empty(user_id)))
    }

    async fn save_cart(&self, user_id: &str, items: Vec<CartLine>) -> AppResult<()> {
        self.uow.carts().upsert_items(user_id, items).await
    }
}
