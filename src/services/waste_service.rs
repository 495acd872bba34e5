//! Waste service - Waste record submission and history.
//!
//! SOLID (SRP): Handles waste records only.
//! DDD: Records are append-only; there is no update or delete path.

use async_trait::async_trait;
use std::sync::Arc;

use crate::config::{Config, GUEST_USER_ID, GUEST_USER_NAME, WASTE_HISTORY_LIMIT};
use crate::domain::{WasteLine, WasteRecord};
use crate::errors::{AppError, AppResult};
use crate::infra::UnitOfWork;

/// Waste submission input, already normalized at the API boundary.
#[derive(Debug, Clone, Default)]
pub struct SubmitWaste {
    /// Account submitting the record; `None` or empty means guest.
    pub user_id: Option<String>,
    /// Wasted item lines; at least one is required.
    pub items: Vec<WasteLine>,
    /// Optional photo evidence as a data URI.
    pub photo: Option<String>,
    /// Free-form reason; may be empty.
    pub reason: Option<String>,
}

/// Waste service trait for dependency injection.
#[async_trait]
pub trait WasteService: Send + Sync {
    /// Append a waste record. Returns the stored record.
    async fn submit(&self, request: SubmitWaste) -> AppResult<WasteRecord>;

    /// A user's waste history, newest first, capped at the most
    /// recent 20.
    async fn list_history(&self, user_id: &str) -> AppResult<Vec<WasteRecord>>;
}

/// Concrete implementation of WasteService using Unit of Work.
pub struct WasteRecorder<U: UnitOfWork> {
    uow: Arc<U>,
    config: Config,
}

impl<U: UnitOfWork> WasteRecorder<U> {
    /// Create new waste service instance with Unit of Work
    pub fn new(uow: Arc<U>, config: Config) -> Self {
        Self { uow, config }
    }
}

#[async_trait]
impl<U: UnitOfWork> WasteService for WasteRecorder<U> {
    async fn submit(&self, request: SubmitWaste) -> AppResult<WasteRecord> {
        if request.items.is_empty() {
            return Err(AppError::validation("Please add at least one item to waste."));
        }

        let user_id = request
            .user_id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| GUEST_USER_ID.to_string());

        let stored = if user_id == GUEST_USER_ID {
            None
        } else {
            self.uow.users().find_by_id(&user_id).await?
        };

        let (name, restaurant_name) = match &stored {
            Some(user) => (user.name.clone(), user.restaurant_name.clone()),
            None => (
                GUEST_USER_NAME.to_string(),
                self.config.restaurant_name.clone(),
            ),
        };

        let record = WasteRecord::new(
            user_id,
            name,
            restaurant_name,
            request.items,
            request.photo,
            request.reason.unwrap_or_default(),
        );

        self.uow.waste().insert(&record).await?;

        Ok(record)
    }

    async fn list_history(&self, user_id: &str) -> AppResult<Vec<WasteRecord>> {
        // No ordering in the store query; sort and cap here
        let mut records = self.uow.waste().list_by_user(user_id).await?;
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        records.truncate(WASTE_HISTORY_LIMIT);
        Ok(records)
    }
}
