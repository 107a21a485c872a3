//! Migrator for the event log schema.
//!
//! Every migration is idempotent (`IF NOT EXISTS`) so startup can run
//! `Migrator::up` unconditionally.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_event;
mod m20240101_000002_add_event_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_event::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000002_add_event_indexes::Migration),
        ]
    }
}
