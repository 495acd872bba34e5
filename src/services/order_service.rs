//! Order service - The order placement workflow.
//!
//! SOLID (SRP): Validates, prices, and assembles the order; the atomic
//! write itself goes through the Unit of Work.
//! DDD: Orchestrates cart, user, and catalog aggregates.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Config, GUEST_USER_ID, GUEST_USER_NAME};
use crate::domain::{CartLine, Order, OrderLine, OrderTotals};
use crate::errors::{AppError, AppResult};
use crate::infra::{OrderCommit, UnitOfWork};

/// Order placement input, already normalized at the API boundary.
#[derive(Debug, Clone, Default)]
pub struct PlaceOrder {
    /// Account placing the order; `None` or empty means guest.
    pub user_id: Option<String>,
    /// Cart lines to order.
    pub items: Vec<CartLine>,
    /// Contact overrides; unset fields fall back to the stored account.
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Order service trait for dependency injection.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Place an order: validate, price the lines, and commit the
    /// invoice row, order row, cart clear, and stock decrements in one
    /// transaction. Returns the stored order.
    async fn place_order(&self, request: PlaceOrder) -> AppResult<Order>;

    /// A user's past orders, newest first.
    async fn list_orders(&self, user_id: &str) -> AppResult<Vec<Order>>;
}

/// Concrete implementation of OrderService using Unit of Work.
pub struct OrderWorkflow<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> OrderWorkflow<U> {
    /// Create new order service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> OrderService for OrderWorkflow<U> {
    async fn place_order(&self, request: PlaceOrder) -> AppResult<Order> {
        // All validation happens before any write
        if request.items.is_empty() {
            return Err(AppError::validation("Your cart is empty"));
        }

        let user_id = request
            .user_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| GUEST_USER_ID.to_string());

        // A stale session id degrades to guest identity instead of
        // failing the order
        let stored = if user_id == GUEST_USER_ID {
            None
        } else {
            self.uow.users().find_by_id(&user_id).await?
        };

        let (name, restaurant_name) = match &stored {
            Some(user) => (user.name.clone(), user.restaurant_name.clone()),
            None => (
                GUEST_USER_NAME.to_string(),
                self.config.restaurant_name.clone(),
            ),
        };

        let email = request
            .email
            .filter(|email| !email.is_empty())
            .or_else(|| stored.as_ref().map(|user| user.email.clone()))
            .filter(|email| !email.is_empty())
            .ok_or_else(|| {
                AppError::validation("Please enter your email before placing the order.")
            })?;

        let phone = request
            .phone
            .filter(|phone| !phone.is_empty())
            .or_else(|| stored.as_ref().and_then(|user| user.phone.clone()))
            .unwrap_or_default();

        let address = request
            .address
            .filter(|address| !address.is_empty())
            .or_else(|| stored.as_ref().and_then(|user| user.address.clone()))
            .unwrap_or_default();

        // Freeze prices into the order
        let lines: Vec<OrderLine> = request.items.iter().map(OrderLine::price).collect();
        let totals = OrderTotals::compute(&lines);

        // Lines without an id never existed in the catalog; nothing to
        // decrement for them
        let decrements: Vec<(String, u32)> = request
            .items
            .iter()
            .filter(|line| !line.id.is_empty())
            .map(|line| (line.id.clone(), line.quantity))
            .collect();

        let clear_cart_for = (user_id != GUEST_USER_ID).then(|| user_id.clone());

        let order = Order::new(
            user_id,
            name,
            restaurant_name,
            lines,
            totals,
            email,
            phone,
            address,
        );

        self.uow
            .commit_order(OrderCommit {
                order: order.clone(),
                clear_cart_for,
                decrements,
            })
            .await?;

        Ok(order)
    }

    async fn list_orders(&self, user_id: &str) -> AppResult<Vec<Order>> {
        // No ordering in the store query; sort here
        let mut orders = self.uow.orders().list_by_user(user_id).await?;
        orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(orders)
    }
}
