//! Catalog handlers - categories and their items.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};

use crate::api::AppState;
use crate::domain::{Category, Item};
use crate::errors::AppResult;

/// Create category routes
pub fn category_routes() -> Router<AppState> {
    Router::new().route("/", get(list_categories))
}

/// List all categories
#[utoipa::path(
    get,
    path = "/api/categories",
    tag = "Catalog",
    responses(
        (status = 200, description = "All categories", body = Vec<Category>)
    )
)]
pub async fn list_categories(State(state): State<AppState>) -> AppResult<Json<Vec<Category>>> {
    let categories = state.services.catalog().list_categories().await?;
    Ok(Json(categories))
}

/// List the items of a category
#[utoipa::path(
    get,
    path = "/api/items/category/{categoryId}",
    tag = "Catalog",
    params(
        ("categoryId" = String, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Items in the category (empty for an unknown category)", body = Vec<Item>)
    )
)]
pub async fn list_category_items(
    State(state): State<AppState>,
    Path(category_id): Path<String>,
) -> AppResult<Json<Vec<Item>>> {
    let items = state.services.catalog().list_items(&category_id).await?;
    Ok(Json(items))
}
