// ABOUTME: Remote voice strategy fetching rendered audio from the speech endpoint
// ABOUTME: Falls back transparently to the device strategy when any stage fails
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

use async_trait::async_trait;
use bytes::Bytes;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, warn};

use super::{AudioSink, DeviceVoice, SpeechSynthesisClient, VoicePlayback};
use crate::errors::{AppError, AppResult};
use crate::providers::elevenlabs::DEFAULT_VOICE_ID;

/// Wire shape posted to the text-to-speech endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SpeechFetchBody<'a> {
    text: &'a str,
    voice_id: &'a str,
}

/// Voice strategy that plays server-rendered audio
///
/// Fetch failure, playback failure, or a non-audio response all degrade
/// to the device strategy with the same text; callers never see the
/// remote path fail.
pub struct RemoteVoice {
    client: Arc<dyn SpeechSynthesisClient>,
    sink: Arc<dyn AudioSink>,
    device: DeviceVoice,
    voice_id: String,
    playing: AtomicBool,
}

impl RemoteVoice {
    /// Create a remote voice with the default coaching voice
    #[must_use]
    pub fn new(
        client: Arc<dyn SpeechSynthesisClient>,
        sink: Arc<dyn AudioSink>,
        device: DeviceVoice,
    ) -> Self {
        Self::with_voice(client, sink, device, DEFAULT_VOICE_ID)
    }

    /// Create a remote voice with an explicit voice id
    #[must_use]
    pub fn with_voice(
        client: Arc<dyn SpeechSynthesisClient>,
        sink: Arc<dyn AudioSink>,
        device: DeviceVoice,
        voice_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            sink,
            device,
            voice_id: voice_id.into(),
            playing: AtomicBool::new(false),
        }
    }

    /// Fetch and play remote audio, erroring at the first failed stage
    async fn play_remote(&self, text: &str) -> AppResult<()> {
        let audio = self.client.fetch_audio(text, &self.voice_id).await?;

        self.playing.store(true, Ordering::SeqCst);
        let result = self.sink.play(audio).await;
        self.playing.store(false, Ordering::SeqCst);
        result
    }
}

#[async_trait]
impl VoicePlayback for RemoteVoice {
    async fn speak(&self, text: &str) -> AppResult<()> {
        match self.play_remote(text).await {
            Ok(()) => Ok(()),
            Err(e) => {
                warn!("Remote voice failed, falling back to device synthesis: {e}");
                self.device.speak(text).await
            }
        }
    }

    fn stop(&self) {
        self.sink.stop();
        self.device.stop();
        self.playing.store(false, Ordering::SeqCst);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst) || self.device.is_playing()
    }
}

/// [`SpeechSynthesisClient`] backed by the gateway's speech endpoint
pub struct HttpSpeechClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSpeechClient {
    /// Create a client against a gateway base URL such as
    /// `http://localhost:8081`
    #[must_use]
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl SpeechSynthesisClient for HttpSpeechClient {
    async fn fetch_audio(&self, text: &str, voice_id: &str) -> AppResult<Bytes> {
        debug!("Fetching synthesized audio from gateway");

        let response = self
            .client
            .post(format!("{}/api/text-to-speech", self.base_url))
            .json(&SpeechFetchBody { text, voice_id })
            .send()
            .await
            .map_err(|e| {
                AppError::service_unreachable("speech endpoint", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                "speech endpoint",
                format!("TTS API error ({status})"),
            ));
        }

        response.bytes().await.map_err(|e| {
            AppError::service_unreachable("speech endpoint", format!("Failed to read audio: {e}"))
        })
    }
}
