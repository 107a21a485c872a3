//! Create `event` table.
//!
//! `id` is an auto-increment surrogate key; on SQLite it is declared
//! `AUTOINCREMENT` so ids are never reused after a bulk delete.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Event::Table)
                    .if_not_exists()
                    .col(pk_auto(Event::Id))
                    .col(string(Event::Author))
                    .col(text(Event::Reason))
                    .col(
                        timestamp_with_time_zone(Event::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Event::Table).if_exists().to_owned()).await
    }
}

#[derive(DeriveIden)]
pub(crate) enum Event { Table, Id, Author, Reason, CreatedAt }
