//! Conference-call answer models.

use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Tri-state answer to a conference call.
///
/// Stored as an integer: 0 = no, 1 = yes, 2 = undecided. New entries start
/// undecided; an author's row only ever moves to yes or no once they answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[repr(i32)]
#[serde(rename_all = "snake_case")]
pub enum CallAnswer {
    No = 0,
    Yes = 1,
    Undecided = 2,
}

impl CallAnswer {
    /// True if the author has answered either way.
    pub fn is_decided(&self) -> bool {
        !matches!(self, CallAnswer::Undecided)
    }
}

impl Default for CallAnswer {
    fn default() -> Self {
        Self::Undecided
    }
}

impl From<bool> for CallAnswer {
    fn from(answer: bool) -> Self {
        if answer { Self::Yes } else { Self::No }
    }
}

impl fmt::Display for CallAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CallAnswer::No => "no",
            CallAnswer::Yes => "yes",
            CallAnswer::Undecided => "undecided",
        };
        f.write_str(s)
    }
}

/// One author's answers to the calls for one conference.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct ConferenceCall {
    /// Unique identifier
    pub cc_id: i64,

    /// Conference this entry belongs to
    pub conference_id: i64,

    /// Answer to the first call for papers
    pub first_call_answer: CallAnswer,

    /// Answer to the second call
    pub second_call_answer: CallAnswer,

    /// Answer to the third call
    pub third_call_answer: CallAnswer,

    /// Whether the author is interested in participating
    pub interested: CallAnswer,

    /// Author this entry belongs to
    pub author_id: i64,
}
