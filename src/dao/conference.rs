//! DAO for the `conference` table.

use crate::connection::ConferenceDb;
use crate::error::{DbError, DbResult};
use crate::models::Conference;
use crate::queries;

/// Data access for conferences.
///
/// The call DAO resolves its "current conference" scope through this
/// collaborator.
#[derive(Clone)]
pub struct ConferenceDao {
    db: ConferenceDb,
}

impl ConferenceDao {
    pub fn new(db: ConferenceDb) -> Self {
        Self { db }
    }

    /// Look up a conference by primary key.
    pub async fn get_conference(&self, id: i64) -> DbResult<Option<Conference>> {
        queries::get_conference(self.db.pool(), id).await
    }

    /// All conferences, in insertion order.
    pub async fn get_all_conferences(&self) -> DbResult<Vec<Conference>> {
        queries::list_conferences(self.db.pool()).await
    }

    /// The currently active conference, if any.
    pub async fn get_current_conference(&self) -> DbResult<Option<Conference>> {
        queries::current_conference(self.db.pool()).await
    }

    /// The currently active conference, failing if none is marked current.
    pub async fn require_current_conference(&self) -> DbResult<Conference> {
        self.get_current_conference()
            .await?
            .ok_or_else(|| DbError::not_found("Conference", "current"))
    }
}
