//! Waste record handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::handlers::cart_handler::LineItemPayload;
use crate::api::AppState;
use crate::domain::WasteRecord;
use crate::errors::AppResult;
use crate::services::SubmitWaste;

/// Waste submission request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWasteRequest {
    /// Account submitting the record; omit for guest
    pub user_id: Option<String>,
    /// Wasted item lines
    #[serde(default)]
    pub items: Vec<LineItemPayload>,
    /// Optional photo as a data URI
    pub photo: Option<String>,
    /// Free-form reason for the wastage
    pub reason: Option<String>,
}

/// Waste submission acknowledgement
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmitWasteResponse {
    pub success: bool,
    #[schema(example = "Waste record has been saved successfully.")]
    pub message: String,
    pub record_id: String,
}

/// Create waste routes
pub fn waste_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(submit_waste))
        .route("/:user_id", get(list_waste_history))
}

/// Submit a waste record
#[utoipa::path(
    post,
    path = "/api/waste",
    tag = "Waste",
    request_body = SubmitWasteRequest,
    responses(
        (status = 200, description = "Waste record stored", body = SubmitWasteResponse),
        (status = 400, description = "No items to waste")
    )
)]
pub async fn submit_waste(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<SubmitWasteRequest>,
) -> AppResult<Json<SubmitWasteResponse>> {
    let record = state
        .services
        .waste()
        .submit(SubmitWaste {
            user_id: payload.user_id,
            items: payload
                .items
                .into_iter()
                .map(LineItemPayload::into_waste_line)
                .collect(),
            photo: payload.photo,
            reason: payload.reason,
        })
        .await?;

    Ok(Json(SubmitWasteResponse {
        success: true,
        message: "Waste record has been saved successfully.".to_string(),
        record_id: record.id,
    }))
}

/// List a user's waste history, newest first, capped at the most
/// recent twenty records
#[utoipa::path(
    get,
    path = "/api/waste/{userId}",
    tag = "Waste",
    params(
        ("userId" = String, Path, description = "Record owner")
    ),
    responses(
        (status = 200, description = "The user's waste records", body = Vec<WasteRecord>)
    )
)]
pub async fn list_waste_history(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> AppResult<Json<Vec<WasteRecord>>> {
    let records = state.services.waste().list_history(&user_id).await?;
    Ok(Json(records))
}
