//! Authentication handlers.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult};

/// User login request. Both fields are optional at the wire level so a
/// missing field gets the legacy message instead of a deserialize error.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// Account email address
    #[schema(example = "chef@tiffin.example")]
    pub email: Option<String>,
    /// Account password
    pub password: Option<String>,
}

/// Successful login response
#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    #[schema(example = "Login successful")]
    pub message: String,
    pub user: User,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

/// Login with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = LoginResponse),
        (status = 400, description = "Missing email or password"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = payload.email.filter(|email| !email.is_empty());
    let password = payload.password.filter(|password| !password.is_empty());
    let (Some(email), Some(password)) = (email, password) else {
        return Err(AppError::validation("Email and password are required"));
    };

    let user = state.services.auth().login(email, password).await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user,
    }))
}
