//! Flash messages as the widget sees them.
//!
//! The session layer owns storage and persistence; this module only defines
//! the read side ([`FlashStore`]) and the decoded message ([`FlashRecord`]).
//! [`MemoryFlash`] is a ready-made store for request-scoped messages and
//! tests.

mod record;
mod store;

pub use record::FlashRecord;
pub use store::{collect_records, FlashMessages, FlashStore, MemoryFlash};
