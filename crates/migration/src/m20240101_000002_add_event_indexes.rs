//! Indexes backing the newest-first listing and author lookups.
use sea_orm_migration::prelude::*;

use crate::m20240101_000001_create_event::Event;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .name("idx_event_created_at_id")
                    .table(Event::Table)
                    .col(Event::CreatedAt)
                    .col(Event::Id)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_event_author")
                    .table(Event::Table)
                    .col(Event::Author)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_event_author").table(Event::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_event_created_at_id").table(Event::Table).to_owned())
            .await
    }
}
