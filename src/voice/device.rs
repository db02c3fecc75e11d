// ABOUTME: On-device voice strategy driving an injected speech synthesis engine
// ABOUTME: Simple idle/speaking state machine with cancel-before-speak semantics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use super::{SpeechEngine, VoicePlayback, DEFAULT_SPEECH_RATE};
use crate::errors::AppResult;

/// Voice strategy that speaks through the platform synthesis engine
///
/// Starting a new utterance cancels whatever is already playing, so at
/// most one utterance is live at a time.
pub struct DeviceVoice {
    engine: Arc<dyn SpeechEngine>,
    rate: f32,
    playing: AtomicBool,
}

impl DeviceVoice {
    /// Create a device voice around an engine at the default rate
    #[must_use]
    pub fn new(engine: Arc<dyn SpeechEngine>) -> Self {
        Self::with_rate(engine, DEFAULT_SPEECH_RATE)
    }

    /// Create a device voice with an explicit speech rate
    #[must_use]
    pub fn with_rate(engine: Arc<dyn SpeechEngine>, rate: f32) -> Self {
        Self {
            engine,
            rate,
            playing: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl VoicePlayback for DeviceVoice {
    async fn speak(&self, text: &str) -> AppResult<()> {
        // Cancel any ongoing utterance before starting the next one
        self.engine.cancel();

        self.playing.store(true, Ordering::SeqCst);
        let result = self.engine.speak(text, self.rate).await;
        self.playing.store(false, Ordering::SeqCst);
        result
    }

    fn stop(&self) {
        self.engine.cancel();
        self.playing.store(false, Ordering::SeqCst);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }
}
