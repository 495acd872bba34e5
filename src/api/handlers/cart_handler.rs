//! Cart handlers plus the loose line-item payload shared by the cart,
//! order and waste endpoints.

use axum::{
    extract::{Path, State},
    response::Json,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::config::DEFAULT_UNITS;
use crate::domain::{CartLine, WasteLine};
use crate::errors::{AppError, AppResult};
use crate::types::ApiResponse;

/// Line item as clients send it. Older clients name the price
/// `actualPrice` or `price` and the title `brand`; every field is
/// optional and [`into_line`](Self::into_line) settles the fallbacks.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemPayload {
    pub id: Option<String>,
    pub title: Option<String>,
    /// Legacy alias for `title`
    pub brand: Option<String>,
    pub item_type: Option<String>,
    pub unit_price: Option<Decimal>,
    /// Legacy aliases for `unitPrice`, newest first
    pub actual_price: Option<Decimal>,
    pub price: Option<Decimal>,
    pub units: Option<String>,
    #[serde(rename = "hasVAT")]
    pub has_vat: Option<bool>,
    pub quantity: Option<u32>,
}

impl LineItemPayload {
    /// Normalize into the canonical cart line. Missing prices resolve to
    /// zero, VAT liability defaults to true and quantity to one.
    pub fn into_line(self) -> CartLine {
        let title = self.normalized_title();
        CartLine {
            id: self.id.unwrap_or_default(),
            title,
            item_type: self.item_type,
            unit_price: self
                .unit_price
                .or(self.actual_price)
                .or(self.price)
                .unwrap_or(Decimal::ZERO),
            units: self
                .units
                .filter(|units| !units.is_empty())
                .unwrap_or_else(|| DEFAULT_UNITS.to_string()),
            has_vat: self.has_vat.unwrap_or(true),
            quantity: self.quantity.unwrap_or(1),
        }
    }

    /// Normalize into a waste line; prices are irrelevant for wastage.
    pub fn into_waste_line(self) -> WasteLine {
        let title = self.normalized_title();
        WasteLine {
            id: self.id.unwrap_or_default(),
            title,
            item_type: self.item_type,
            quantity: self.quantity.unwrap_or(1),
            units: self
                .units
                .filter(|units| !units.is_empty())
                .unwrap_or_else(|| DEFAULT_UNITS.to_string()),
        }
    }

    fn normalized_title(&self) -> String {
        self.title
            .clone()
            .filter(|title| !title.is_empty())
            .or_else(|| self.brand.clone())
            .unwrap_or_default()
    }
}

/// Full cart replacement request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    /// Owner of the cart; required
    pub user_id: Option<String>,
    /// Complete list of lines; replaces whatever is stored
    #[serde(default)]
    pub cart: Vec<LineItemPayload>,
}

/// Stored cart as returned to clients. A user without a stored cart
/// gets an empty item list and no timestamp.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartLine>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Replace a user's stored cart
#[utoipa::path(
    post,
    path = "/api/items/cart/update",
    tag = "Cart",
    request_body = UpdateCartRequest,
    responses(
        (status = 200, description = "Cart stored"),
        (status = 400, description = "Missing user id")
    )
)]
pub async fn update_cart(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UpdateCartRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    let Some(user_id) = payload.user_id.filter(|id| !id.is_empty()) else {
        return Err(AppError::validation("User ID is required"));
    };

    let items = payload
        .cart
        .into_iter()
        .map(LineItemPayload::into_line)
        .collect();
    state.services.carts().save_cart(&user_id, items).await?;

    Ok(Json(ApiResponse::message("Cart updated successfully")))
}

/// Fetch a user's stored cart
#[utoipa::path(
    get,
    path = "/api/items/cart/{userId}",
    tag = "Cart",
    params(
        ("userId" = String, Path, description = "Cart owner")
    ),
    responses(
        (status = 200, description = "Stored cart, empty if none was ever saved", body = CartResponse)
    )
)]
pub async fn get_cart(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<CartResponse>> {
    let record = state.services.carts().fetch_cart(&user_id).await?;
    Ok(Json(CartResponse {
        items: record.items,
        updated_at: record.updated_at,
    }))
}
