//! Full-text search over field names using FTS5.
//!
//! FTS5 is built into SQLite, no extension loading required. The
//! `fields_fts` table is configured as an "external content" table: it
//! indexes `field.field_name` without storing a copy, and triggers keep the
//! index in sync with the source table.
//!
//! Two query shapes are exposed:
//! - prefix search for type-ahead ("Mach" matches "Machine Learning" and
//!   "Machining" but not "Mathematics")
//! - natural-language lookup returning the single best-ranked field
//!
//! See: https://www.sqlite.org/fts5.html

use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};
use crate::models::Field;

/// Find all fields whose name starts with the typed text.
///
/// The input is treated literally, not as FTS5 syntax: it is quoted and
/// turned into a phrase-prefix query, so punctuation in the input cannot
/// break the match expression.
pub async fn search_fields_prefix(pool: &SqlitePool, typed: &str) -> DbResult<Vec<Field>> {
    let query = prefix_query(typed)?;

    let fields = sqlx::query_as::<_, Field>(
        r#"
        SELECT f.field_id, f.field_name
        FROM fields_fts
        JOIN field f ON fields_fts.rowid = f.field_id
        WHERE fields_fts MATCH ?
        ORDER BY f.field_id
        "#,
    )
    .bind(query)
    .fetch_all(pool)
    .await?;

    Ok(fields)
}

/// Look up a single field by (approximate) name.
///
/// Runs a natural-language match and returns the best-ranked result, or
/// `None` when nothing matches.
pub async fn find_field_by_name(pool: &SqlitePool, name: &str) -> DbResult<Option<Field>> {
    validate_fts_input(name)?;

    let field = sqlx::query_as::<_, Field>(
        r#"
        SELECT f.field_id, f.field_name
        FROM fields_fts
        JOIN field f ON fields_fts.rowid = f.field_id
        WHERE fields_fts MATCH ?
        ORDER BY bm25(fields_fts)
        LIMIT 1
        "#,
    )
    .bind(quote_phrase(name))
    .fetch_optional(pool)
    .await?;

    Ok(field)
}

/// Rebuild the FTS index for fields.
///
/// Use this after bulk imports or if the index gets out of sync.
pub async fn rebuild_fields_fts(pool: &SqlitePool) -> DbResult<()> {
    sqlx::query("INSERT INTO fields_fts(fields_fts) VALUES('rebuild')")
        .execute(pool)
        .await?;
    Ok(())
}

/// Number of field names currently indexed.
pub async fn fields_indexed(pool: &SqlitePool) -> DbResult<u64> {
    let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM fields_fts")
        .fetch_one(pool)
        .await?;
    Ok(count.0 as u64)
}

/// Build a phrase-prefix FTS5 query from user-typed text.
fn prefix_query(typed: &str) -> DbResult<String> {
    validate_fts_input(typed)?;
    Ok(format!("{}*", quote_phrase(typed)))
}

/// Quote text as a literal FTS5 phrase, doubling embedded quotes.
fn quote_phrase(text: &str) -> String {
    format!("\"{}\"", text.trim().replace('"', "\"\""))
}

fn validate_fts_input(text: &str) -> DbResult<()> {
    if text.trim().is_empty() {
        return Err(DbError::invalid_data("search text cannot be empty"));
    }
    Ok(())
}
