//! Database models.
//!
//! These structs map directly to database tables via sqlx, by column name.

mod call;
mod conference;
mod field;

pub use call::{CallAnswer, ConferenceCall};
pub use conference::Conference;
pub use field::Field;
