//! HTTP request handlers.
//!
//! The `/api/items` tree mirrors the legacy mobile client's routing:
//! category items, the cart endpoints, and order placement all live
//! under it.

use axum::{
    routing::{get, post},
    Router,
};

use crate::api::AppState;

pub mod auth_handler;
pub mod cart_handler;
pub mod catalog_handler;
pub mod order_handler;
pub mod waste_handler;

pub use auth_handler::auth_routes;
pub use catalog_handler::category_routes;
pub use order_handler::order_routes;
pub use waste_handler::waste_routes;

/// Create the legacy `/api/items` routes: category items, cart
/// storage, and order placement.
pub fn item_routes() -> Router<AppState> {
    Router::new()
        .route("/category/:category_id", get(catalog_handler::list_category_items))
        .route("/cart/update", post(cart_handler::update_cart))
        .route("/cart/:user_id", get(cart_handler::get_cart))
        .route("/place-order", post(order_handler::place_order))
}
