//! The `event` entity: one reported occurrence (author, reason, timestamp).
use chrono::{DateTime, Utc};
use sea_orm::{entity::prelude::*, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "event")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub author: String,
    #[sea_orm(column_type = "Text")]
    pub reason: String,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Reject empty or whitespace-only values. The value itself is stored as given.
pub fn validate_field(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} required")));
    }
    Ok(())
}

/// Build an insertable row. `id` is left to the database and `created_at` is
/// stamped with `now`, never taken from the client.
pub fn new_active(author: &str, reason: &str, now: DateTime<Utc>) -> Result<ActiveModel, ModelError> {
    validate_field("author", author)?;
    validate_field("reason", reason)?;
    Ok(ActiveModel {
        author: Set(author.to_string()),
        reason: Set(reason.to_string()),
        created_at: Set(now.fixed_offset()),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    #[test]
    fn new_active_leaves_id_to_database() {
        let now = Utc::now();
        let am = new_active("alice", "overslept", now).unwrap();
        assert!(matches!(am.id, ActiveValue::NotSet));
        assert_eq!(am.author, Set("alice".to_string()));
        assert_eq!(am.created_at, Set(now.fixed_offset()));
    }

    #[test]
    fn blank_fields_are_rejected() {
        assert!(matches!(new_active("  ", "x", Utc::now()), Err(ModelError::Validation(_))));
        let err = new_active("bob", "", Utc::now()).unwrap_err();
        assert_eq!(err.to_string(), "validation error: reason required");
    }
}
