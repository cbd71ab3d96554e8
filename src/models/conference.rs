//! Conference model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A conference edition.
///
/// At most one conference is marked current at any time; the conference-call
/// DAO scopes its convenience queries to that row.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct Conference {
    /// Unique identifier
    pub conference_id: i64,

    /// Conference title
    pub title: String,

    /// Whether this is the active conference
    pub is_current: bool,
}
