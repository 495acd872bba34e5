//! Unit of Work pattern implementation.
//!
//! SOLID (SRP): Manages transaction lifecycle and repository access.
//! DDD: Coordinates operations across multiple aggregates atomically.
//!
//! The one multi-aggregate write in this system is order placement:
//! invoice row, order row, cart clear, and stock decrements must land
//! together or not at all. That write is modeled as an explicit
//! `OrderCommit` value so the trait stays object-safe and mockable.

use async_trait::async_trait;
use sea_orm::{
    AccessMode, ActiveModelTrait, DatabaseConnection, DatabaseTransaction, EntityTrait,
    IsolationLevel, Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use super::repositories::entities::{invoice, inventory_item, order, user_cart};
use super::repositories::{
    CartRepository, CartStore, CatalogRepository, CatalogStore, OrderRepository, OrderStore,
    UserRepository, UserStore, WasteRepository, WasteStore,
};
use crate::domain::{remaining_quantity, Order};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Everything order placement writes in one transaction.
#[derive(Debug, Clone)]
pub struct OrderCommit {
    /// The order to store; its id becomes the orders row id. The
    /// invoice copy gets a fresh id of its own.
    pub order: Order,
    /// Cart to empty after the order lands; `None` for guest orders.
    pub clear_cart_for: Option<String>,
    /// Item ids and ordered quantities to subtract from stock.
    pub decrements: Vec<(String, u32)>,
}

/// Unit of Work trait for dependency injection.
///
/// Provides centralized access to all repositories plus the one atomic
/// multi-aggregate operation this system has.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Get user repository
    fn users(&self) -> Arc<dyn UserRepository>;

    /// Get catalog repository
    fn catalog(&self) -> Arc<dyn CatalogRepository>;

    /// Get cart repository
    fn carts(&self) -> Arc<dyn CartRepository>;

    /// Get order repository
    fn orders(&self) -> Arc<dyn OrderRepository>;

    /// Get waste repository
    fn waste(&self) -> Arc<dyn WasteRepository>;

    /// Apply an order commit in a single transaction.
    ///
    /// Committed on success, rolled back on any error; a failed commit
    /// leaves no partial writes behind.
    async fn commit_order(&self, commit: OrderCommit) -> AppResult<()>;
}

/// Concrete implementation of UnitOfWork
pub struct Persistence {
    db: DatabaseConnection,
    users: Arc<UserStore>,
    catalog: Arc<CatalogStore>,
    carts: Arc<CartStore>,
    orders: Arc<OrderStore>,
    waste: Arc<WasteStore>,
}

impl Persistence {
    /// Create new UnitOfWork instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            users: Arc::new(UserStore::new(db.clone())),
            catalog: Arc::new(CatalogStore::new(db.clone())),
            carts: Arc::new(CartStore::new(db.clone())),
            orders: Arc::new(OrderStore::new(db.clone())),
            waste: Arc::new(WasteStore::new(db.clone())),
            db,
        }
    }
}

#[async_trait]
impl UnitOfWork for Persistence {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.users.clone()
    }

    fn catalog(&self) -> Arc<dyn CatalogRepository> {
        self.catalog.clone()
    }

    fn carts(&self) -> Arc<dyn CartRepository> {
        self.carts.clone()
    }

    fn orders(&self) -> Arc<dyn OrderRepository> {
        self.orders.clone()
    }

    fn waste(&self) -> Arc<dyn WasteRepository> {
        self.waste.clone()
    }

    async fn commit_order(&self, commit: OrderCommit) -> AppResult<()> {
        // ReadCommitted is enough: every write here is an insert or a
        // single-row update
        let txn = self
            .db
            .begin_with_config(
                Some(IsolationLevel::ReadCommitted),
                Some(AccessMode::ReadWrite),
            )
            .await
            .map_err(AppError::from)?;

        match apply_order_commit(&txn, &commit).await {
            Ok(()) => {
                txn.commit().await.map_err(AppError::from)?;
                Ok(())
            }
            Err(e) => {
                if let Err(rollback_err) = txn.rollback().await {
                    tracing::error!("Transaction rollback failed: {}", rollback_err);
                }
                Err(e)
            }
        }
    }
}

/// All order-placement writes, against one open transaction.
async fn apply_order_commit(txn: &DatabaseTransaction, commit: &OrderCommit) -> AppResult<()> {
    // Invoice copy under its own id
    invoice::ActiveModel::from_order(&commit.order, Uuid::new_v4().to_string())?
        .insert(txn)
        .await
        .map_err(AppError::from)?;

    // The order itself
    order::ActiveModel::from_order(&commit.order, commit.order.id.clone())?
        .insert(txn)
        .await
        .map_err(AppError::from)?;

    // Empty the cart row, creating it if the user never synced one
    if let Some(user_id) = &commit.clear_cart_for {
        let now = chrono::Utc::now();
        let empty = serde_json::to_value(Vec::<crate::domain::CartLine>::new())?;

        match user_cart::Entity::find_by_id(user_id)
            .one(txn)
            .await
            .map_err(AppError::from)?
        {
            Some(model) => {
                let mut active: user_cart::ActiveModel = model.into();
                active.items = Set(empty);
                active.updated_at = Set(now);
                active.update(txn).await.map_err(AppError::from)?;
            }
            None => {
                let active = user_cart::ActiveModel {
                    user_id: Set(user_id.clone()),
                    items: Set(empty),
                    updated_at: Set(now),
                };
                active.insert(txn).await.map_err(AppError::from)?;
            }
        }
    }

    // Stock decrements. Items deleted from the catalog since the cart
    // was filled are skipped, not an error. Read-then-write at
    // ReadCommitted can interleave with a concurrent order; the clamp
    // keeps stock from going negative.
    for (item_id, ordered) in &commit.decrements {
        let Some(model) = inventory_item::Entity::find_by_id(item_id)
            .one(txn)
            .await
            .map_err(AppError::from)?
        else {
            continue;
        };

        let remaining = remaining_quantity(model.available_quantity, *ordered);
        let mut active: inventory_item::ActiveModel = model.into();
        active.available_quantity = Set(remaining);
        active.updated_at = Set(chrono::Utc::now());
        active.update(txn).await.map_err(AppError::from)?;
    }

    Ok(())
}
