#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use amhp_application::AmhpApp;
use amhp_core::config::AppConfig;
use amhp_core::error::{AmhpError, Result};
use amhp_core::event::AppEvent;
use amhp_core::speech::{SpeechCapabilities, SpeechRecognizer, SpeechSynthesizer, Utterance};
use amhp_infrastructure::MemoryKeyValueStore;
use async_trait::async_trait;
use tokio::sync::mpsc::UnboundedReceiver;

pub fn test_config() -> AppConfig {
    AppConfig {
        seed: Some(7),
        ..AppConfig::default()
    }
}

pub async fn start_app(store: &MemoryKeyValueStore) -> (AmhpApp, UnboundedReceiver<AppEvent>) {
    start_app_with(store, test_config(), SpeechCapabilities::none()).await
}

pub async fn start_app_with(
    store: &MemoryKeyValueStore,
    config: AppConfig,
    speech: SpeechCapabilities,
) -> (AmhpApp, UnboundedReceiver<AppEvent>) {
    AmhpApp::start(Arc::new(store.clone()), config, speech).await
}

/// Everything emitted so far.
pub fn drain(rx: &mut UnboundedReceiver<AppEvent>) -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

pub struct FixedRecognizer {
    pub transcript: Option<String>,
}

#[async_trait]
impl SpeechRecognizer for FixedRecognizer {
    async fn listen(&self, _locale: &str) -> Result<String> {
        self.transcript
            .clone()
            .ok_or_else(|| AmhpError::internal("no speech detected"))
    }
}

#[derive(Default)]
pub struct RecordingSynthesizer {
    pub spoken: Mutex<Vec<Utterance>>,
}

impl SpeechSynthesizer for RecordingSynthesizer {
    fn speak(&self, utterance: &Utterance) -> Result<()> {
        self.spoken.lock().unwrap().push(utterance.clone());
        Ok(())
    }
}
