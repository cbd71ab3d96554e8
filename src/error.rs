//! Error types for the database layer.

use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for database operations.
pub type DbResult<T> = Result<T, DbError>;

/// Database error types.
///
/// Execution failures, missing rows, and constraint violations are distinct
/// variants so callers can react to each without string matching.
#[derive(Debug, Error, Diagnostic)]
pub enum DbError {
    /// SQLite/sqlx error
    #[error("Database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Unique or foreign-key constraint violation
    #[error("Constraint violation: {message}")]
    ConstraintViolation { message: String },

    /// Live schema does not match a declared table descriptor
    #[error("Schema mismatch in table {table}: {message}")]
    #[diagnostic(help(
        "The TableSchema descriptors must match the migrated schema exactly, \
         including column order"
    ))]
    SchemaMismatch {
        table: &'static str,
        message: String,
    },

    /// Invalid data
    #[error("Invalid data: {message}")]
    InvalidData { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error (for filesystem operations if needed)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DbError {
    /// Create a not found error.
    pub fn not_found(entity_type: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            id: id.to_string(),
        }
    }

    /// Create a constraint violation error.
    pub fn constraint(message: impl Into<String>) -> Self {
        Self::ConstraintViolation {
            message: message.into(),
        }
    }

    /// Create a schema mismatch error.
    pub fn schema_mismatch(table: &'static str, message: impl Into<String>) -> Self {
        Self::SchemaMismatch {
            table,
            message: message.into(),
        }
    }

    /// Create an invalid data error.
    pub fn invalid_data(message: impl Into<String>) -> Self {
        Self::InvalidData {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Convert a sqlx error, surfacing unique and foreign-key violations
    /// as [`DbError::ConstraintViolation`].
    pub fn from_write_error(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db)
                if db.is_unique_violation() || db.is_foreign_key_violation() =>
            {
                Self::ConstraintViolation {
                    message: db.message().to_string(),
                }
            }
            _ => Self::Sqlx(err),
        }
    }
}
