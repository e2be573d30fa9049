//! In-memory [`KeyValueStore`] for ephemeral sessions and tests.

use std::collections::HashMap;
use std::sync::Arc;

use amhp_core::error::Result;
use amhp_core::store::{KeyValueStore, StoreKey};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MemoryKeyValueStore {
    values: Arc<RwLock<HashMap<StoreKey, Value>>>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store pre-populated with `values`.
    pub fn with_values(values: impl IntoIterator<Item = (StoreKey, Value)>) -> Self {
        Self {
            values: Arc::new(RwLock::new(values.into_iter().collect())),
        }
    }
}

#[async_trait]
impl KeyValueStore for MemoryKeyValueStore {
    async fn get(&self, key: StoreKey) -> Result<Option<Value>> {
        Ok(self.values.read().await.get(&key).cloned())
    }

    async fn set(&self, key: StoreKey, value: Value) -> Result<()> {
        self.values.write().await.insert(key, value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_last_write_wins() {
        let store = MemoryKeyValueStore::new();
        store.set(StoreKey::MoodData, json!([1])).await.unwrap();
        store.set(StoreKey::MoodData, json!([2])).await.unwrap();

        assert_eq!(store.get(StoreKey::MoodData).await.unwrap(), Some(json!([2])));
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemoryKeyValueStore::with_values([(StoreKey::Settings, json!({}))]);
        let other = store.clone();
        other.set(StoreKey::Settings, json!({"theme": "dark"})).await.unwrap();

        assert_eq!(
            store.get(StoreKey::Settings).await.unwrap(),
            Some(json!({"theme": "dark"}))
        );
    }
}
