//! Conference Database Layer
//!
//! SQLite-based data access for a conference-management application: fields
//! of study, conferences, and per-author conference-call answers.
//!
//! # Architecture
//!
//! - **Declared table descriptors** - validated against the live schema at
//!   startup, so a drifted migration fails the open instead of a later query
//! - **FTS5 for text search** - type-ahead prefix search over field names
//! - **Injected DAOs** - constructed once at process start, no singletons
//! - **Explicit results** - execution failures propagate, lookup misses are
//!   `None`, constraint violations are their own error kind
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use conference_db::{ConferenceDb, FieldDao, TracingChangeLog};
//!
//! let db = ConferenceDb::open("path/to/conference.db").await?;
//! let log = Arc::new(TracingChangeLog);
//! let fields = FieldDao::new(db.clone(), log.clone());
//! let field = fields.create_field("Machine Learning").await?;
//! ```

pub mod changelog;
pub mod config;
pub mod connection;
pub mod dao;
pub mod error;
pub mod fts;
pub mod models;
pub mod queries;
pub mod schema;

pub use changelog::{ChangeCategory, ChangeEntry, ChangeLog, MemoryChangeLog, TracingChangeLog};
pub use config::DatabaseConfig;
pub use connection::{ConferenceDb, DbStats};
pub use dao::{ConferenceCallDao, ConferenceDao, FieldDao};
pub use error::{DbError, DbResult};
pub use models::{CallAnswer, Conference, ConferenceCall, Field};
pub use queries::AnswerColumn;
pub use schema::TableSchema;
