//! Field-related database queries.

use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};
use crate::models::Field;

/// Create a new field and return the stored row.
///
/// A duplicate name surfaces as [`DbError::ConstraintViolation`].
pub async fn create_field(pool: &SqlitePool, name: &str) -> DbResult<Field> {
    let field = sqlx::query_as::<_, Field>(
        "INSERT INTO field (field_name) VALUES (?) RETURNING field_id, field_name",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .map_err(DbError::from_write_error)?;
    Ok(field)
}

/// Get a field by ID.
pub async fn get_field(pool: &SqlitePool, id: i64) -> DbResult<Option<Field>> {
    let field =
        sqlx::query_as::<_, Field>("SELECT field_id, field_name FROM field WHERE field_id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
    Ok(field)
}

/// List all fields in insertion order.
pub async fn list_fields(pool: &SqlitePool) -> DbResult<Vec<Field>> {
    let fields =
        sqlx::query_as::<_, Field>("SELECT field_id, field_name FROM field ORDER BY field_id")
            .fetch_all(pool)
            .await?;
    Ok(fields)
}

/// Rename a field.
///
/// Returns [`DbError::NotFound`] if no row has the given ID, and
/// [`DbError::ConstraintViolation`] if the new name is already taken.
pub async fn rename_field(pool: &SqlitePool, id: i64, name: &str) -> DbResult<()> {
    let result = sqlx::query("UPDATE field SET field_name = ? WHERE field_id = ?")
        .bind(name)
        .bind(id)
        .execute(pool)
        .await
        .map_err(DbError::from_write_error)?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("Field", id));
    }
    Ok(())
}

/// Delete a field.
pub async fn delete_field(pool: &SqlitePool, id: i64) -> DbResult<()> {
    sqlx::query("DELETE FROM field WHERE field_id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConferenceDb;

    #[tokio::test]
    async fn test_create_get_round_trip() {
        let db = ConferenceDb::open_in_memory().await.unwrap();

        let created = create_field(db.pool(), "Machine Learning").await.unwrap();
        assert_eq!(created.field_name, "Machine Learning");

        let fetched = get_field(db.pool(), created.field_id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn test_unique_ids() {
        let db = ConferenceDb::open_in_memory().await.unwrap();

        let a = create_field(db.pool(), "Mathematics").await.unwrap();
        let b = create_field(db.pool(), "Physics").await.unwrap();
        assert_ne!(a.field_id, b.field_id);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_constraint_violation() {
        let db = ConferenceDb::open_in_memory().await.unwrap();

        create_field(db.pool(), "Chemistry").await.unwrap();
        let err = create_field(db.pool(), "Chemistry").await.unwrap_err();
        assert!(matches!(err, DbError::ConstraintViolation { .. }));
    }

    #[tokio::test]
    async fn test_list_is_idempotent_and_ordered() {
        let db = ConferenceDb::open_in_memory().await.unwrap();

        create_field(db.pool(), "Biology").await.unwrap();
        create_field(db.pool(), "Astronomy").await.unwrap();

        let first = list_fields(db.pool()).await.unwrap();
        let second = list_fields(db.pool()).await.unwrap();
        assert_eq!(first, second);
        // Insertion order, not alphabetical
        assert_eq!(first[0].field_name, "Biology");
        assert_eq!(first[1].field_name, "Astronomy");
    }

    #[tokio::test]
    async fn test_rename_persists() {
        let db = ConferenceDb::open_in_memory().await.unwrap();

        let field = create_field(db.pool(), "Geologie").await.unwrap();
        rename_field(db.pool(), field.field_id, "Geology")
            .await
            .unwrap();

        let fetched = get_field(db.pool(), field.field_id).await.unwrap().unwrap();
        assert_eq!(fetched.field_name, "Geology");
    }

    #[tokio::test]
    async fn test_rename_missing_is_not_found() {
        let db = ConferenceDb::open_in_memory().await.unwrap();

        let err = rename_field(db.pool(), 9999, "Nothing").await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let db = ConferenceDb::open_in_memory().await.unwrap();

        let field = create_field(db.pool(), "Robotics").await.unwrap();
        delete_field(db.pool(), field.field_id).await.unwrap();

        let fetched = get_field(db.pool(), field.field_id).await.unwrap();
        assert_eq!(fetched, None);
    }
}
