//! Waste records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::config::WASTE_STATUS_SUBMITTED;

/// An item line inside a waste record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteLine {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_type: Option<String>,
    pub quantity: u32,
    pub units: String,
}

/// A submitted waste record. Append-only: records are never mutated or
/// deleted once written.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WasteRecord {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub restaurant_name: String,
    pub items: Vec<WasteLine>,
    /// Optional photo evidence, stored inline as a data URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    pub reason: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

impl WasteRecord {
    /// Build a new record with a fresh id, submission status, and the
    /// current time.
    pub fn new(
        user_id: impl Into<String>,
        name: impl Into<String>,
        restaurant_name: impl Into<String>,
        items: Vec<WasteLine>,
        photo: Option<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.into(),
            name: name.into(),
            restaurant_name: restaurant_name.into(),
            items,
            photo,
            reason: reason.into(),
            created_at: Utc::now(),
            status: WASTE_STATUS_SUBMITTED.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_is_stamped_submitted() {
        let record = WasteRecord::new(
            "user-1",
            "Priya",
            "Saravana Bhavan",
            vec![WasteLine {
                id: "item-1".to_string(),
                title: "Dosa Batter".to_string(),
                item_type: None,
                quantity: 2,
                units: "KG".to_string(),
            }],
            None,
            "Expired",
        );

        assert_eq!(record.status, "submitted");
        assert!(!record.id.is_empty());
        assert_eq!(record.items.len(), 1);
    }
}
