//! Settings lifecycle: load with defaults, validated update, persist.

use std::sync::Arc;

use serde_json::Value;

use super::model::{SettingKey, Settings};
use crate::error::Result;
use crate::store::{KeyValueStore, StoreKey, load_value, save_record};

/// Owns the in-memory settings and keeps the store in sync.
///
/// Settings are never deleted; every successful update overwrites the full
/// persisted object.
pub struct SettingsManager {
    settings: Settings,
    store: Arc<dyn KeyValueStore>,
}

impl SettingsManager {
    /// Loads settings, backfilling defaults for anything missing or malformed.
    pub async fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let settings = match load_value(store.as_ref(), StoreKey::Settings).await {
            Some(persisted) => Settings::merged_over_defaults(&persisted),
            None => Settings::default(),
        };

        tracing::debug!(?settings, "Settings loaded");
        Self { settings, store }
    }

    pub fn current(&self) -> &Settings {
        &self.settings
    }

    /// Validates and applies one setting, then persists the merged object.
    ///
    /// Unknown keys and invalid values are rejected without any change. A
    /// failed write is logged; the in-memory value still takes effect.
    pub async fn update(&mut self, key: &str, value: Value) -> Result<&Settings> {
        let key = SettingKey::parse(key)?;

        let mut updated = self.settings.clone();
        updated.apply(key, &value)?;
        self.settings = updated;

        if let Err(e) = save_record(self.store.as_ref(), StoreKey::Settings, &self.settings).await {
            tracing::warn!(%key, error = %e, "Failed to persist settings");
        }

        tracing::info!(%key, "Setting updated");
        Ok(&self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AmhpError, ValidationError};
    use crate::settings::{TextSize, Theme};
    use async_trait::async_trait;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mock store for testing
    #[derive(Default)]
    struct MockStore {
        values: Mutex<HashMap<StoreKey, Value>>,
    }

    #[async_trait]
    impl KeyValueStore for MockStore {
        async fn get(&self, key: StoreKey) -> Result<Option<Value>> {
            Ok(self.values.lock().unwrap().get(&key).cloned())
        }

        async fn set(&self, key: StoreKey, value: Value) -> Result<()> {
            self.values.lock().unwrap().insert(key, value);
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_load_without_data_gives_defaults() {
        let store = Arc::new(MockStore::default());
        let manager = SettingsManager::load(store).await;
        assert_eq!(manager.current(), &Settings::default());
    }

    #[tokio::test]
    async fn test_load_merges_partial_data() {
        let store = Arc::new(MockStore::default());
        store.set(StoreKey::Settings, json!({ "theme": "dark" })).await.unwrap();

        let manager = SettingsManager::load(store).await;
        let settings = manager.current();
        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.text_size, TextSize::Medium);
        assert_eq!(settings.language, "en");
        assert!(!settings.voice_enabled);
    }

    #[tokio::test]
    async fn test_update_persists_full_object() {
        let store = Arc::new(MockStore::default());
        let mut manager = SettingsManager::load(store.clone()).await;

        manager.update("textSize", json!("large")).await.unwrap();

        let persisted = store.get(StoreKey::Settings).await.unwrap().unwrap();
        assert_eq!(
            persisted,
            json!({ "theme": "light", "textSize": "large", "language": "en", "voiceEnabled": false })
        );
    }

    #[tokio::test]
    async fn test_update_rejects_unknown_key() {
        let store = Arc::new(MockStore::default());
        let mut manager = SettingsManager::load(store.clone()).await;

        let err = manager.update("volume", json!(11)).await.unwrap_err();
        assert!(matches!(
            err,
            AmhpError::Validation(ValidationError::UnknownSettingKey(_))
        ));
        assert!(store.get(StoreKey::Settings).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_rejects_invalid_value() {
        let store = Arc::new(MockStore::default());
        let mut manager = SettingsManager::load(store.clone()).await;

        assert!(manager.update("theme", json!("neon")).await.is_err());
        assert_eq!(manager.current().theme, Theme::Light);
        assert!(store.get(StoreKey::Settings).await.unwrap().is_none());
    }
}
