//! Optional speech capabilities.
//!
//! Both services may be absent. Callers must treat absence as
//! [`AmhpError::CapabilityUnavailable`](crate::error::AmhpError) and keep going.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// Speech-to-text.
#[async_trait]
pub trait SpeechRecognizer: Send + Sync {
    /// Listens for a single utterance and returns its transcript.
    async fn listen(&self, locale: &str) -> Result<String>;
}

/// Text-to-speech. Fire-and-forget.
pub trait SpeechSynthesizer: Send + Sync {
    fn speak(&self, utterance: &Utterance) -> Result<()>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub locale: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    /// Assistant speech is slightly slower than normal.
    pub fn assistant(text: impl Into<String>, locale: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            locale: locale.into(),
            rate: 0.8,
            pitch: 1.0,
        }
    }
}

/// Whatever speech services the platform offers.
#[derive(Clone, Default)]
pub struct SpeechCapabilities {
    pub recognizer: Option<Arc<dyn SpeechRecognizer>>,
    pub synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
}

impl SpeechCapabilities {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_recognizer(mut self, recognizer: Arc<dyn SpeechRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_synthesizer(mut self, synthesizer: Arc<dyn SpeechSynthesizer>) -> Self {
        self.synthesizer = Some(synthesizer);
        self
    }
}
