use std::sync::Arc;

use chrono::{DateTime, FixedOffset, Utc};
use sea_orm::DatabaseConnection;
use tracing::{info, instrument};

use models::event;

use crate::errors::ServiceError;
use crate::event::repository::{EventStore, SeaOrmEventStore};
use crate::pagination::ListParams;

const SECONDS_PER_DAY: i64 = 86_400;

/// Whole days from `then` to `now`, rounded toward negative infinity.
///
/// Earlier the same day yields 0; a timestamp in the future yields a negative
/// count.
pub fn days_between(now: DateTime<Utc>, then: DateTime<FixedOffset>) -> i64 {
    now.signed_duration_since(then).num_seconds().div_euclid(SECONDS_PER_DAY)
}

/// Application service over an injected `EventStore`.
/// Validates input before it reaches storage and derives the day-count.
#[derive(Clone)]
pub struct EventService {
    store: Arc<dyn EventStore>,
}

impl EventService {
    pub fn new(store: Arc<dyn EventStore>) -> Self { Self { store } }

    pub fn with_sea_orm(db: DatabaseConnection) -> Self {
        Self::new(Arc::new(SeaOrmEventStore::new(db)))
    }

    #[instrument(skip(self, reason))]
    pub async fn create(&self, author: &str, reason: &str) -> Result<event::Model, ServiceError> {
        event::validate_field("author", author)?;
        event::validate_field("reason", reason)?;
        let created = self.store.insert(author, reason).await?;
        info!(id = created.id, "event recorded");
        Ok(created)
    }

    pub async fn list(&self, params: ListParams) -> Result<Vec<event::Model>, ServiceError> {
        let params = params.validate()?;
        self.store.list(params).await
    }

    pub async fn most_recent(&self) -> Result<Option<event::Model>, ServiceError> {
        self.store.most_recent().await
    }

    /// Days since the most recent event as of `now`; 0 when there are none.
    pub async fn days_since_last(&self, now: DateTime<Utc>) -> Result<i64, ServiceError> {
        Ok(self
            .store
            .most_recent()
            .await?
            .map(|last| days_between(now, last.created_at))
            .unwrap_or(0))
    }

    #[instrument(skip(self))]
    pub async fn clear_all(&self) -> Result<u64, ServiceError> {
        let deleted = self.store.clear_all().await?;
        info!(deleted, "all events cleared");
        Ok(deleted)
    }
}
