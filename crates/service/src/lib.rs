//! Storage layer for event records.
//! - `event::repository` owns persistence behind the `EventStore` trait.
//! - `event::service` adds validation and the day-count on top of a store.
//! - Nothing here knows about HTTP.

pub mod errors;
pub mod runtime;
pub mod pagination;
pub mod event;
#[cfg(test)]
pub mod test_support;

pub use event::{days_between, EventService, EventStore, SeaOrmEventStore};
