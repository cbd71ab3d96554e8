//! Database query functions.
//!
//! Organized by domain:
//! - `field`: Field CRUD
//! - `conference`: Conference lookups
//! - `call`: Conference-call answer operations

mod call;
mod conference;
mod field;

pub use call::*;
pub use conference::*;
pub use field::*;
