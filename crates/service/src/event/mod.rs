pub mod repository;
pub mod service;

pub use repository::{EventStore, SeaOrmEventStore};
pub use service::{days_between, EventService};
