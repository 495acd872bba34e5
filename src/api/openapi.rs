//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{
    auth_handler, cart_handler, catalog_handler, order_handler, waste_handler,
};
use crate::domain::{Category, CartLine, Item, Order, OrderLine, User, WasteLine, WasteRecord};

/// OpenAPI documentation for the Tiffin API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tiffin API",
        version = "0.1.0",
        description = "Restaurant supply ordering backend: catalog, carts, orders, and waste tracking",
        contact(name = "API Support", email = "support@example.com")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        // Authentication endpoints
        auth_handler::login,
        // Catalog endpoints
        catalog_handler::list_categories,
        catalog_handler::list_category_items,
        // Cart endpoints
        cart_handler::update_cart,
        cart_handler::get_cart,
        // Order endpoints
        order_handler::place_order,
        order_handler::list_orders,
        // Waste endpoints
        waste_handler::submit_waste,
        waste_handler::list_waste_history,
    ),
    components(
        schemas(
            // Domain types
            User,
            Category,
            Item,
            CartLine,
            Order,
            OrderLine,
            WasteLine,
            WasteRecord,
            // Auth types
            auth_handler::LoginRequest,
            auth_handler::LoginResponse,
            // Cart types
            cart_handler::LineItemPayload,
            cart_handler::UpdateCartRequest,
            cart_handler::CartResponse,
            // Order types
            order_handler::PlaceOrderRequest,
            order_handler::PlaceOrderResponse,
            // Waste types
            waste_handler::SubmitWasteRequest,
            waste_handler::SubmitWasteResponse,
        )
    ),
    tags(
        (name = "Authentication", description = "Account login"),
        (name = "Catalog", description = "Categories and their items"),
        (name = "Cart", description = "Stored cart read and replace"),
        (name = "Orders", description = "Order placement and history"),
        (name = "Waste", description = "Waste record submission and history")
    )
)]
pub struct ApiDoc;
