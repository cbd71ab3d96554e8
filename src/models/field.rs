//! Field of study model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A scientific field a conference or author can be associated with.
///
/// Field names are unique; the database enforces this and renames that
/// collide surface as constraint violations.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Field {
    /// Unique identifier
    pub field_id: i64,

    /// Unique human-readable name
    pub field_name: String,
}
