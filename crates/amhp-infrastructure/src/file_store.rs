//! File-backed [`KeyValueStore`].
//!
//! Each key lives in `<dir>/<key>.json`. Blocking file I/O runs on the
//! blocking pool; writes within one process are serialized.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use amhp_core::error::{AmhpError, Result};
use amhp_core::store::{KeyValueStore, StoreKey};
use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use crate::storage::AtomicFile;

#[derive(Clone)]
pub struct FileKeyValueStore {
    dir: PathBuf,
    write_lock: Arc<Mutex<()>>,
}

impl FileKeyValueStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: StoreKey) -> AtomicFile<Value> {
        AtomicFile::json(self.dir.join(format!("{}.json", key.as_str())))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: StoreKey) -> Result<Option<Value>> {
        let file = self.file_for(key);
        tokio::task::spawn_blocking(move || file.load().map_err(AmhpError::from))
            .await
            .map_err(|e| AmhpError::internal(format!("Failed to join task: {}", e)))?
    }

    async fn set(&self, key: StoreKey, value: Value) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let file = self.file_for(key);
        tokio::task::spawn_blocking(move || file.save(&value).map_err(AmhpError::from))
            .await
            .map_err(|e| AmhpError::internal(format!("Failed to join task: {}", e)))??;
        tracing::trace!(key = %key, "Persisted record");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_set_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store
            .set(StoreKey::Settings, json!({"theme": "dark"}))
            .await
            .unwrap();

        let value = store.get(StoreKey::Settings).await.unwrap();
        assert_eq!(value, Some(json!({"theme": "dark"})));
        assert!(temp_dir.path().join("settings.json").exists());
    }

    #[tokio::test]
    async fn test_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert_eq!(store.get(StoreKey::MoodData).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("chat-history.json"), "[{").unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        assert!(store.get(StoreKey::ChatHistory).await.is_err());
    }

    #[tokio::test]
    async fn test_overwrite_replaces_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileKeyValueStore::new(temp_dir.path());

        store.set(StoreKey::CurrentUser, json!({"id": "a"})).await.unwrap();
        store.set(StoreKey::CurrentUser, json!({"id": "b"})).await.unwrap();

        assert_eq!(
            store.get(StoreKey::CurrentUser).await.unwrap(),
            Some(json!({"id": "b"}))
        );
    }
}
