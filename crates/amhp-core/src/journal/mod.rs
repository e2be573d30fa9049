//! Journal domain module.

mod model;

pub use model::{Journal, JournalEntry};
