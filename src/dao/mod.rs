//! Domain-named data access objects.
//!
//! Each DAO wraps the query layer with domain methods, emits change-log
//! entries for every write, and keeps the caller's in-memory model in step
//! with the just-written row. DAOs are constructed once at process start and
//! passed to consumers explicitly; there is no global instance.

mod call;
mod conference;
mod field;

pub use call::ConferenceCallDao;
pub use conference::ConferenceDao;
pub use field::FieldDao;
