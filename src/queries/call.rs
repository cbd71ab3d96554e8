//! Conference-call answer queries.

use sqlx::SqlitePool;

use crate::error::{DbError, DbResult};
use crate::models::{CallAnswer, ConferenceCall};

const SELECT_CALL: &str = "SELECT cc_id, conference_id, first_call_answer, \
     second_call_answer, third_call_answer, interested, author_id FROM conference_call";

/// Which answer column an update targets.
///
/// Updates go through this enum instead of positional column indices; the
/// names are checked against the table descriptor in tests and at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerColumn {
    FirstCall,
    SecondCall,
    ThirdCall,
    Interested,
}

impl AnswerColumn {
    /// Column name in the `conference_call` table.
    pub fn column_name(&self) -> &'static str {
        match self {
            AnswerColumn::FirstCall => "first_call_answer",
            AnswerColumn::SecondCall => "second_call_answer",
            AnswerColumn::ThirdCall => "third_call_answer",
            AnswerColumn::Interested => "interested",
        }
    }

    /// Human-readable label for change-log messages.
    pub fn label(&self) -> &'static str {
        match self {
            AnswerColumn::FirstCall => "first call answer",
            AnswerColumn::SecondCall => "second call answer",
            AnswerColumn::ThirdCall => "third call answer",
            AnswerColumn::Interested => "interest",
        }
    }
}

/// Create an entry for one author and one conference.
///
/// All answers start [`CallAnswer::Undecided`]. A missing conference
/// surfaces as [`DbError::ConstraintViolation`] (foreign key).
pub async fn create_call_entry(
    pool: &SqlitePool,
    conference_id: i64,
    author_id: i64,
) -> DbResult<ConferenceCall> {
    let call = sqlx::query_as::<_, ConferenceCall>(
        "INSERT INTO conference_call (conference_id, author_id) VALUES (?, ?) \
         RETURNING cc_id, conference_id, first_call_answer, second_call_answer, \
         third_call_answer, interested, author_id",
    )
    .bind(conference_id)
    .bind(author_id)
    .fetch_one(pool)
    .await
    .map_err(DbError::from_write_error)?;
    Ok(call)
}

/// Get an entry by primary key.
pub async fn get_call(pool: &SqlitePool, cc_id: i64) -> DbResult<Option<ConferenceCall>> {
    let call = sqlx::query_as::<_, ConferenceCall>(&format!("{SELECT_CALL} WHERE cc_id = ?"))
        .bind(cc_id)
        .fetch_optional(pool)
        .await?;
    Ok(call)
}

/// List all entries in insertion order.
pub async fn list_calls(pool: &SqlitePool) -> DbResult<Vec<ConferenceCall>> {
    let calls = sqlx::query_as::<_, ConferenceCall>(&format!("{SELECT_CALL} ORDER BY cc_id"))
        .fetch_all(pool)
        .await?;
    Ok(calls)
}

/// List all entries for one author, across conferences.
pub async fn list_calls_for_author(
    pool: &SqlitePool,
    author_id: i64,
) -> DbResult<Vec<ConferenceCall>> {
    let calls = sqlx::query_as::<_, ConferenceCall>(&format!(
        "{SELECT_CALL} WHERE author_id = ? ORDER BY cc_id"
    ))
    .bind(author_id)
    .fetch_all(pool)
    .await?;
    Ok(calls)
}

/// List all entries for one conference.
pub async fn list_calls_for_conference(
    pool: &SqlitePool,
    conference_id: i64,
) -> DbResult<Vec<ConferenceCall>> {
    let calls = sqlx::query_as::<_, ConferenceCall>(&format!(
        "{SELECT_CALL} WHERE conference_id = ? ORDER BY cc_id"
    ))
    .bind(conference_id)
    .fetch_all(pool)
    .await?;
    Ok(calls)
}

/// Get one author's entry for one conference.
pub async fn get_call_for_author(
    pool: &SqlitePool,
    conference_id: i64,
    author_id: i64,
) -> DbResult<Option<ConferenceCall>> {
    let call = sqlx::query_as::<_, ConferenceCall>(&format!(
        "{SELECT_CALL} WHERE author_id = ? AND conference_id = ?"
    ))
    .bind(author_id)
    .bind(conference_id)
    .fetch_optional(pool)
    .await?;
    Ok(call)
}

/// Update one answer column of one entry by primary key.
///
/// Returns [`DbError::NotFound`] if no row has the given ID.
pub async fn update_call_answer(
    pool: &SqlitePool,
    cc_id: i64,
    column: AnswerColumn,
    answer: CallAnswer,
) -> DbResult<()> {
    let result = sqlx::query(&format!(
        "UPDATE conference_call SET {} = ? WHERE cc_id = ?",
        column.column_name()
    ))
    .bind(answer)
    .bind(cc_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DbError::not_found("ConferenceCall", cc_id));
    }
    Ok(())
}

/// Update one answer column for one author within one conference, as a
/// single statement. Returns the row as written.
///
/// The author+conference scope and the write happen in the same UPDATE, so
/// two concurrent updates of the same row serialize at the database; the
/// final state is always one of the written values.
pub async fn update_call_answer_for_author(
    pool: &SqlitePool,
    conference_id: i64,
    author_id: i64,
    column: AnswerColumn,
    answer: CallAnswer,
) -> DbResult<ConferenceCall> {
    let call = sqlx::query_as::<_, ConferenceCall>(&format!(
        "UPDATE conference_call SET {} = ? WHERE author_id = ? AND conference_id = ? \
         RETURNING cc_id, conference_id, first_call_answer, second_call_answer, \
         third_call_answer, interested, author_id",
        column.column_name()
    ))
    .bind(answer)
    .bind(author_id)
    .bind(conference_id)
    .fetch_optional(pool)
    .await?;

    call.ok_or_else(|| DbError::not_found("ConferenceCall", format!("author {author_id}")))
}

/// Delete an entry by primary key.
pub async fn delete_call(pool: &SqlitePool, cc_id: i64) -> DbResult<()> {
    sqlx::query("DELETE FROM conference_call WHERE cc_id = ?")
        .bind(cc_id)
        .execute(pool)
        .await?;
    Ok(())
}
