//! Persistence boundary.
//!
//! - `repository`: the [`KeyValueStore`] trait and [`StoreKey`] names
//! - `records`: typed helpers that degrade to defaults on bad data

mod records;
mod repository;

pub use records::{load_collection, load_record, load_value, save_record};
pub use repository::{KeyValueStore, StoreKey};
