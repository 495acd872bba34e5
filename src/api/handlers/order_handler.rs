//! Order handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::handlers::cart_handler::LineItemPayload;
use crate::api::AppState;
use crate::domain::Order;
use crate::errors::AppResult;
use crate::services::PlaceOrder;

/// Order placement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderRequest {
    /// Account placing the order; omit for guest checkout
    pub user_id: Option<String>,
    /// Cart lines to order
    #[serde(default)]
    pub items: Vec<LineItemPayload>,
    /// Client-computed total; accepted for backwards compatibility and
    /// ignored, the server prices every order itself
    pub total: Option<Decimal>,
    /// Contact overrides; unset fields fall back to the account record
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// Order placement acknowledgement
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PlaceOrderResponse {
    pub success: bool,
    #[schema(example = "Order placed successfully!")]
    pub message: String,
    pub order_id: String,
}

/// Create order routes
pub fn order_routes() -> Router<AppState> {
    Router::new().route("/:user_id", get(list_orders))
}

/// Place an order
#[utoipa::path(
    post,
    path = "/api/items/place-order",
    tag = "Orders",
    request_body = PlaceOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = PlaceOrderResponse),
        (status = 400, description = "Empty cart or missing email")
    )
)]
pub async fn place_order(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<PlaceOrderRequest>,
) -> AppResult<Json<PlaceOrderResponse>> {
    let order = state
        .services
        .orders()
        .place_order(PlaceOrder {
            user_id: payload.user_id,
            items: payload
                .items
                .into_iter()
                .map(LineItemPayload::into_line)
                .collect(),
            email: payload.email,
            phone: payload.phone,
            address: payload.address,
        })
        .await?;

    Ok(Json(PlaceOrderResponse {
        success: true,
        message: "Order placed successfully!".to_string(),
        order_id: order.id,
    }))
}

/// List a user's orders, newest first
#[utoipa::path(
    get,
    path = "/api/orders/{userId}",
    tag = "Orders",
    params(
        ("userId" = String, Path, description = "Order owner")
    ),
    responses(
        (status = 200, description = "The user's orders", body = Vec<Order>)
    )
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = state.services.orders().list_orders(&user_id).await?;
    Ok(Json(orders))
}
