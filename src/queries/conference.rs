//! Conference-related database queries.

use sqlx::SqlitePool;

use crate::error::DbResult;
use crate::models::Conference;

/// Get a conference by ID.
pub async fn get_conference(pool: &SqlitePool, id: i64) -> DbResult<Option<Conference>> {
    let conference = sqlx::query_as::<_, Conference>(
        "SELECT conference_id, title, is_current FROM conference WHERE conference_id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(conference)
}

/// Get the currently active conference, if one is marked current.
pub async fn current_conference(pool: &SqlitePool) -> DbResult<Option<Conference>> {
    let conference = sqlx::query_as::<_, Conference>(
        "SELECT conference_id, title, is_current FROM conference WHERE is_current = 1",
    )
    .fetch_optional(pool)
    .await?;
    Ok(conference)
}

/// List all conferences in insertion order.
pub async fn list_conferences(pool: &SqlitePool) -> DbResult<Vec<Conference>> {
    let conferences = sqlx::query_as::<_, Conference>(
        "SELECT conference_id, title, is_current FROM conference ORDER BY conference_id",
    )
    .fetch_all(pool)
    .await?;
    Ok(conferences)
}

/// Create a conference.
///
/// Marking a second conference current violates the partial unique index
/// and surfaces as [`crate::error::DbError::ConstraintViolation`].
pub async fn create_conference(
    pool: &SqlitePool,
    title: &str,
    is_current: bool,
) -> DbResult<Conference> {
    let conference = sqlx::query_as::<_, Conference>(
        "INSERT INTO conference (title, is_current) VALUES (?, ?) \
         RETURNING conference_id, title, is_current",
    )
    .bind(title)
    .bind(is_current)
    .fetch_one(pool)
    .await
    .map_err(crate::error::DbError::from_write_error)?;
    Ok(conference)
}
