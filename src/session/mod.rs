//! Session context - one user's live cart and order state.
//!
//! DDD: The session is the application-side aggregate that the mobile
//! client drives: the signed-in user (if any), the in-memory cart, and
//! the in-flight order guard. Cart mutations apply locally first and
//! then sync the full line array to the store in the background; a
//! failed sync is logged and dropped, never retried, and never rolls
//! the local mutation back. Guests keep their cart local only.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::{Cart, CartLine, Order, User};
use crate::errors::{AppError, AppResult};
use crate::services::{PlaceOrder, ServiceContainer};

/// Contact overrides supplied at checkout. Unset fields fall back to
/// the stored account.
#[derive(Debug, Clone, Default)]
pub struct OrderContact {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// A live session over the service container.
pub struct Session {
    services: Arc<dyn ServiceContainer>,
    user: Mutex<Option<User>>,
    cart: Mutex<Cart>,
    order_pending: AtomicBool,
}

impl Session {
    /// Start a session. With a signed-in user the stored cart is
    /// restored once; a failed restore logs and starts empty rather
    /// than blocking the session. Guests start empty and skip the
    /// store entirely.
    pub async fn start(services: Arc<dyn ServiceContainer>, user: Option<User>) -> Arc<Self> {
        let session = Arc::new(Self {
            services,
            user: Mutex::new(None),
            cart: Mutex::new(Cart::new()),
            order_pending: AtomicBool::new(false),
        });

        if let Some(user) = user {
            let cart = match session.services.carts().fetch_cart(&user.id).await {
                Ok(record) => Cart::from_lines(record.items),
                Err(e) => {
                    tracing::warn!("Failed to restore stored cart: {}", e);
                    Cart::new()
                }
            };
            *session.cart.lock().await = cart;
            *session.user.lock().await = Some(user);
        }

        session
    }

    /// The signed-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.user.lock().await.clone()
    }

    /// Current cart lines, in insertion order.
    pub async fn cart_lines(&self) -> Vec<CartLine> {
        self.cart.lock().await.snapshot()
    }

    /// Total unit count across the cart, as shown on the cart badge.
    pub async fn total_quantity(&self) -> u32 {
        self.cart.lock().await.total_quantity()
    }

    /// Add an item to the cart and sync.
    pub async fn add_item(&self, item: CartLine) -> Vec<CartLine> {
        let snapshot = self.cart.lock().await.add(item);
        self.sync_cart(snapshot.clone()).await;
        snapshot
    }

    /// Remove an item from the cart entirely and sync.
    pub async fn remove_item(&self, item_id: &str) -> Vec<CartLine> {
        let snapshot = self.cart.lock().await.remove(item_id);
        self.sync_cart(snapshot.clone()).await;
        snapshot
    }

    /// Apply a quantity delta (clamped at zero, zero removes) and sync.
    pub async fn change_quantity(&self, item_id: &str, delta: i32) -> Vec<CartLine> {
        let snapshot = self.cart.lock().await.set_quantity(item_id, delta);
        self.sync_cart(snapshot.clone()).await;
        snapshot
    }

    /// Empty the cart and sync the empty list.
    pub async fn clear_cart(&self) -> Vec<CartLine> {
        let snapshot = self.cart.lock().await.clear();
        self.sync_cart(snapshot.clone()).await;
        snapshot
    }

    /// Place an order from the current cart.
    ///
    /// At most one order can be in flight per session; a second call
    /// while one is pending is rejected without side effects. On
    /// success the local cart is cleared (which syncs the empty list);
    /// on failure the cart is left untouched.
    pub async fn place_order(&self, contact: OrderContact) -> AppResult<Order> {
        if self
            .order_pending
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(AppError::validation("An order is already in progress"));
        }

        let result = self.place_order_inner(contact).await;
        self.order_pending.store(false, Ordering::SeqCst);
        result
    }

    async fn place_order_inner(&self, contact: OrderContact) -> AppResult<Order> {
        let items = self.cart.lock().await.snapshot();
        let user = self.user.lock().await.clone();

        let request = PlaceOrder {
            user_id: user.map(|user| user.id),
            items,
            email: contact.email,
            phone: contact.phone,
            address: contact.address,
        };

        let order = self.services.orders().place_order(request).await?;

        // The commit already emptied the stored cart; clearing the
        // local aggregate triggers one more sync of the empty list
        self.clear_cart().await;

        Ok(order)
    }

    /// Drop the signed-in user and the local cart. The stored cart
    /// record is left as-is.
    pub async fn logout(&self) {
        *self.user.lock().await = None;
        self.cart.lock().await.clear();
    }

    /// Sync the given lines to the store in the background. Guests
    /// skip the sync; a failure is logged and dropped.
    async fn sync_cart(&self, items: Vec<CartLine>) {
        let user = self.user.lock().await.clone();
        let Some(user) = user else {
            return;
        };

        let carts = self.services.carts();
        tokio::spawn(async move {
            if let Err(e) = carts.save_cart(&user.id, items).await {
                tracing::warn!("Cart sync failed: {}", e);
            }
        });
    }
}
