use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait, QueryOrder,
    QuerySelect, TransactionTrait,
};
use tracing::{debug, warn};

use models::event;

use crate::errors::ServiceError;
use crate::pagination::ListParams;

/// Persistence of event records. Every call is its own unit of work.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist a new record; the store assigns `id` and `created_at`.
    async fn insert(&self, author: &str, reason: &str) -> Result<event::Model, ServiceError>;
    /// Newest first (`created_at` desc, then `id` desc).
    async fn list(&self, params: ListParams) -> Result<Vec<event::Model>, ServiceError>;
    async fn most_recent(&self) -> Result<Option<event::Model>, ServiceError>;
    /// Remove every record atomically and return how many were removed.
    async fn clear_all(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed store.
///
/// Each operation runs inside `TransactionTrait::transaction`: a pooled
/// connection is acquired, committed on `Ok`, rolled back on `Err` and
/// released on every path.
#[derive(Clone)]
pub struct SeaOrmEventStore {
    pub db: DatabaseConnection,
}

impl SeaOrmEventStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }

    async fn unit_of_work<F, T>(&self, op: &'static str, work: F) -> Result<T, ServiceError>
    where
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            ) -> Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>
            + Send,
        T: Send,
    {
        self.db
            .transaction::<F, T, DbErr>(work)
            .await
            .map_err(|e| {
                warn!(op, error = %e, "unit of work rolled back");
                ServiceError::from(e)
            })
    }
}

fn newest_first() -> sea_orm::Select<event::Entity> {
    event::Entity::find()
        .order_by_desc(event::Column::CreatedAt)
        .order_by_desc(event::Column::Id)
}

#[async_trait]
impl EventStore for SeaOrmEventStore {
    async fn insert(&self, author: &str, reason: &str) -> Result<event::Model, ServiceError> {
        let am = event::new_active(author, reason, Utc::now())?;
        let created = self
            .unit_of_work("insert", move |txn| Box::pin(async move { am.insert(txn).await }))
            .await?;
        debug!(id = created.id, "event inserted");
        Ok(created)
    }

    async fn list(&self, params: ListParams) -> Result<Vec<event::Model>, ServiceError> {
        let (skip, limit) = params.bounded();
        self.unit_of_work("list", move |txn| {
            Box::pin(async move { newest_first().offset(skip).limit(limit).all(txn).await })
        })
        .await
    }

    async fn most_recent(&self) -> Result<Option<event::Model>, ServiceError> {
        self.unit_of_work("most_recent", |txn| Box::pin(async move { newest_first().one(txn).await }))
            .await
    }

    async fn clear_all(&self) -> Result<u64, ServiceError> {
        let deleted = self
            .unit_of_work("clear_all", |txn| {
                Box::pin(async move {
                    let res = event::Entity::delete_many().exec(txn).await?;
                    Ok(res.rows_affected)
                })
            })
            .await?;
        debug!(deleted, "events cleared");
        Ok(deleted)
    }
}
