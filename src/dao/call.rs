//! DAO for the `conference_call` table.

use std::sync::Arc;

use crate::changelog::{ChangeCategory, ChangeLog};
use crate::connection::ConferenceDb;
use crate::dao::ConferenceDao;
use crate::error::DbResult;
use crate::models::{CallAnswer, ConferenceCall};
use crate::queries::{self, AnswerColumn};

/// Data access for conference-call answers.
///
/// "Current conference" convenience methods resolve the active conference
/// through [`ConferenceDao`] and scope their queries to it.
#[derive(Clone)]
pub struct ConferenceCallDao {
    db: ConferenceDb,
    conferences: ConferenceDao,
    log: Arc<dyn ChangeLog>,
}

impl ConferenceCallDao {
    pub fn new(db: ConferenceDb, conferences: ConferenceDao, log: Arc<dyn ChangeLog>) -> Self {
        Self {
            db,
            conferences,
            log,
        }
    }

    /// Create an entry with all answers undecided.
    pub async fn create_entry(&self, conference_id: i64, author_id: i64) -> DbResult<ConferenceCall> {
        let call = queries::create_call_entry(self.db.pool(), conference_id, author_id).await?;
        self.log.change(
            ChangeCategory::Create,
            &format!("Add call entry for author {author_id} to conference {conference_id}"),
        );
        Ok(call)
    }

    /// Delete an entry.
    pub async fn delete_entry(&self, call: &ConferenceCall) -> DbResult<()> {
        queries::delete_call(self.db.pool(), call.cc_id).await?;
        self.log.change(
            ChangeCategory::Delete,
            &format!(
                "Delete call entry for author {} from conference {}",
                call.author_id, call.conference_id
            ),
        );
        Ok(())
    }

    /// All entries from the table.
    pub async fn get_all(&self) -> DbResult<Vec<ConferenceCall>> {
        queries::list_calls(self.db.pool()).await
    }

    /// All entries tied to the specified author.
    pub async fn get_authors_answers(&self, author_id: i64) -> DbResult<Vec<ConferenceCall>> {
        queries::list_calls_for_author(self.db.pool(), author_id).await
    }

    /// Look up an entry by primary key.
    pub async fn get_by_id(&self, id: i64) -> DbResult<Option<ConferenceCall>> {
        queries::get_call(self.db.pool(), id).await
    }

    /// All entries for the current conference.
    pub async fn get_current(&self) -> DbResult<Vec<ConferenceCall>> {
        let conference = self.conferences.require_current_conference().await?;
        self.get_for_conference(conference.conference_id).await
    }

    /// The specified author's entry for the current conference, if any.
    pub async fn get_current_answer(&self, author_id: i64) -> DbResult<Option<ConferenceCall>> {
        let conference = self.conferences.require_current_conference().await?;
        queries::get_call_for_author(self.db.pool(), conference.conference_id, author_id).await
    }

    /// All entries tied to the specified conference.
    pub async fn get_for_conference(&self, conference_id: i64) -> DbResult<Vec<ConferenceCall>> {
        queries::list_calls_for_conference(self.db.pool(), conference_id).await
    }

    /// Record an answer to the first call.
    pub async fn update_first_call(&self, call: &mut ConferenceCall, answer: bool) -> DbResult<()> {
        self.update_answer(call, AnswerColumn::FirstCall, answer).await
    }

    /// Record the specified author's answer to the first call for the
    /// current conference.
    pub async fn update_first_call_for_author(&self, author_id: i64, answer: bool) -> DbResult<()> {
        self.update_answer_for_author(author_id, AnswerColumn::FirstCall, answer)
            .await
    }

    /// Record an answer to the second call.
    pub async fn update_second_call(&self, call: &mut ConferenceCall, answer: bool) -> DbResult<()> {
        self.update_answer(call, AnswerColumn::SecondCall, answer).await
    }

    /// Record the specified author's answer to the second call for the
    /// current conference.
    pub async fn update_second_call_for_author(&self, author_id: i64, answer: bool) -> DbResult<()> {
        self.update_answer_for_author(author_id, AnswerColumn::SecondCall, answer)
            .await
    }

    /// Record an answer to the third call.
    pub async fn update_third_call(&self, call: &mut ConferenceCall, answer: bool) -> DbResult<()> {
        self.update_answer(call, AnswerColumn::ThirdCall, answer).await
    }

    /// Record the specified author's answer to the third call for the
    /// current conference.
    pub async fn update_third_call_for_author(&self, author_id: i64, answer: bool) -> DbResult<()> {
        self.update_answer_for_author(author_id, AnswerColumn::ThirdCall, answer)
            .await
    }

    /// Record whether the author is interested in participating.
    pub async fn update_interested(
        &self,
        call: &mut ConferenceCall,
        is_interested: bool,
    ) -> DbResult<()> {
        self.update_answer(call, AnswerColumn::Interested, is_interested)
            .await
    }

    /// Record the specified author's interest in the current conference.
    pub async fn update_interested_for_author(
        &self,
        author_id: i64,
        is_interested: bool,
    ) -> DbResult<()> {
        self.update_answer_for_author(author_id, AnswerColumn::Interested, is_interested)
            .await
    }

    /// Update one answer column by primary key and keep the caller's model
    /// in step with the row.
    async fn update_answer(
        &self,
        call: &mut ConferenceCall,
        column: AnswerColumn,
        answer: bool,
    ) -> DbResult<()> {
        let new = CallAnswer::from(answer);
        let past = *answer_field(call, column);
        queries::update_call_answer(self.db.pool(), call.cc_id, column, new).await?;
        *answer_field(call, column) = new;
        self.log.change(
            ChangeCategory::Update,
            &format!("Update {} from {past} to {new}", column.label()),
        );
        Ok(())
    }

    /// Update one answer column for an author's current-conference entry.
    ///
    /// The scope resolution and the write are one UPDATE statement, so a
    /// concurrent update of the same row cannot interleave mid-operation.
    async fn update_answer_for_author(
        &self,
        author_id: i64,
        column: AnswerColumn,
        answer: bool,
    ) -> DbResult<()> {
        let conference = self.conferences.require_current_conference().await?;
        let new = CallAnswer::from(answer);
        queries::update_call_answer_for_author(
            self.db.pool(),
            conference.conference_id,
            author_id,
            column,
            new,
        )
        .await?;
        self.log.change(
            ChangeCategory::Update,
            &format!(
                "Update {} for author {author_id} to {new}",
                column.label()
            ),
        );
        Ok(())
    }
}

fn answer_field(call: &mut ConferenceCall, column: AnswerColumn) -> &mut CallAnswer {
    match column {
        AnswerColumn::FirstCall => &mut call.first_call_answer,
        AnswerColumn::SecondCall => &mut call.second_call_answer,
        AnswerColumn::ThirdCall => &mut call.third_call_answer,
        AnswerColumn::Interested => &mut call.interested,
    }
}
