//! Identity fields shared by every persisted entity.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Identifier and creation timestamp embedded by value in each entity.
///
/// Entities flatten this into their own row, so the `accounts` and
/// `transactions` tables both carry `id` and `created_at` columns.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct RecordMeta {
    /// Unique identifier, generated by the service layer
    pub id: Uuid,

    /// Timestamp when the record was first persisted
    pub created_at: DateTime<Utc>,
}

impl RecordMeta {
    /// Fresh metadata for a record about to be created.
    pub fn generate() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
        }
    }
}
