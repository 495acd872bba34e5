//! User domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User account.
///
/// The stored password is plaintext legacy data; it is never serialized,
/// so any response carrying a `User` has it stripped by construction.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(skip)]
    pub password: String,
    pub name: String,
    pub restaurant_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Check the supplied password against the stored one.
    ///
    /// Accounts store the password as-is; comparison is a straight
    /// equality check.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
