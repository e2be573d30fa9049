//! Typed load/save helpers over [`KeyValueStore`].
//!
//! Reads never fail: unreadable or malformed data is logged and replaced by
//! an empty collection or `None`.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::repository::{KeyValueStore, StoreKey};
use crate::error::Result;

/// Loads a single record, degrading to `None` on any storage or shape error.
pub async fn load_record<T: DeserializeOwned>(store: &dyn KeyValueStore, key: StoreKey) -> Option<T> {
    let value = load_value(store, key).await?;
    match serde_json::from_value(value) {
        Ok(record) => Some(record),
        Err(e) => {
            tracing::warn!(%key, error = %e, "Discarding malformed record");
            None
        }
    }
}

/// Loads a list, skipping elements that do not decode.
///
/// A value that is not a JSON array yields an empty list.
pub async fn load_collection<T: DeserializeOwned>(store: &dyn KeyValueStore, key: StoreKey) -> Vec<T> {
    let Some(value) = load_value(store, key).await else {
        return Vec::new();
    };

    let Value::Array(items) = value else {
        tracing::warn!(%key, "Stored collection is not a list, starting empty");
        return Vec::new();
    };

    let total = items.len();
    let records: Vec<T> = items
        .into_iter()
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect();

    if records.len() < total {
        tracing::warn!(
            %key,
            skipped = total - records.len(),
            "Skipped malformed entries while loading collection"
        );
    }

    records
}

/// Serializes and stores a record (or a whole collection).
pub async fn save_record<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: StoreKey,
    record: &T,
) -> Result<()> {
    let value = serde_json::to_value(record)?;
    store.set(key, value).await
}

/// Loads the raw value stored under `key`, hiding storage errors.
pub async fn load_value(store: &dyn KeyValueStore, key: StoreKey) -> Option<Value> {
    match store.get(key).await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(%key, error = %e, "Failed to read from store, using defaults");
            None
        }
    }
}
