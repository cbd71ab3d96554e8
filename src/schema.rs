//! Table descriptors and startup schema validation.
//!
//! Each table carries an immutable [`TableSchema`] describing its name,
//! primary key, and declared column order. The descriptors are checked once,
//! when the database is opened, against `PRAGMA table_info` — a drifted
//! migration or a stale descriptor fails the open instead of misreading rows
//! at some later call site. Row mapping itself is always by column name.

use sqlx::{Row, SqlitePool};

use crate::error::{DbError, DbResult};

/// Immutable metadata for one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSchema {
    /// Table name
    pub name: &'static str,
    /// Primary key column
    pub primary_key: &'static str,
    /// Non-key columns, in declaration order
    pub columns: &'static [&'static str],
}

impl TableSchema {
    /// All column names in declaration order, primary key first.
    pub fn all_columns(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.primary_key).chain(self.columns.iter().copied())
    }
}

/// Descriptor for the `field` table.
pub const FIELD: TableSchema = TableSchema {
    name: "field",
    primary_key: "field_id",
    columns: &["field_name"],
};

/// Descriptor for the `conference` table.
pub const CONFERENCE: TableSchema = TableSchema {
    name: "conference",
    primary_key: "conference_id",
    columns: &["title", "is_current"],
};

/// Descriptor for the `conference_call` table.
pub const CONFERENCE_CALL: TableSchema = TableSchema {
    name: "conference_call",
    primary_key: "cc_id",
    columns: &[
        "conference_id",
        "first_call_answer",
        "second_call_answer",
        "third_call_answer",
        "interested",
        "author_id",
    ],
};

/// All declared descriptors.
pub const ALL_TABLES: &[TableSchema] = &[FIELD, CONFERENCE, CONFERENCE_CALL];

/// Validate every declared descriptor against the live database.
///
/// Compares column names AND order. Runs after migrations during
/// [`crate::ConferenceDb::open`].
pub async fn verify_schema(pool: &SqlitePool) -> DbResult<()> {
    for table in ALL_TABLES {
        verify_table(pool, table).await?;
    }
    Ok(())
}

async fn verify_table(pool: &SqlitePool, table: &TableSchema) -> DbResult<()> {
    // PRAGMA table_info returns one row per column, ordered by cid.
    let rows = sqlx::query(&format!("PRAGMA table_info({})", table.name))
        .fetch_all(pool)
        .await?;

    if rows.is_empty() {
        return Err(DbError::schema_mismatch(
            table.name,
            "table does not exist in the database",
        ));
    }

    let live: Vec<String> = rows
        .iter()
        .map(|row| row.try_get::<String, _>("name"))
        .collect::<Result<_, _>>()?;

    let declared: Vec<&str> = table.all_columns().collect();

    if live.len() != declared.len() {
        return Err(DbError::schema_mismatch(
            table.name,
            format!(
                "declared {} columns, database has {}",
                declared.len(),
                live.len()
            ),
        ));
    }

    for (i, (decl, actual)) in declared.iter().zip(live.iter()).enumerate() {
        if decl != actual {
            return Err(DbError::schema_mismatch(
                table.name,
                format!("column {i}: declared '{decl}', database has '{actual}'"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConferenceDb;

    #[test]
    fn all_columns_puts_primary_key_first() {
        let cols: Vec<_> = FIELD.all_columns().collect();
        assert_eq!(cols, vec!["field_id", "field_name"]);

        let cols: Vec<_> = CONFERENCE_CALL.all_columns().collect();
        assert_eq!(cols[0], "cc_id");
        assert_eq!(cols.len(), 7);
    }

    #[tokio::test]
    async fn migrated_database_matches_descriptors() {
        let db = ConferenceDb::open_in_memory().await.unwrap();
        verify_schema(db.pool()).await.unwrap();
    }

    #[tokio::test]
    async fn missing_table_is_a_schema_mismatch() {
        let db = ConferenceDb::open_in_memory().await.unwrap();
        let bogus = TableSchema {
            name: "no_such_table",
            primary_key: "id",
            columns: &[],
        };
        let err = verify_table(db.pool(), &bogus).await.unwrap_err();
        assert!(matches!(err, DbError::SchemaMismatch { .. }));
    }
}
