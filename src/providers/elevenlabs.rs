// ABOUTME: ElevenLabs provider client for text-to-speech synthesis
// ABOUTME: Posts text to the voice endpoint and returns raw MP3 bytes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # ElevenLabs Provider
//!
//! Speech synthesis via `POST /v1/text-to-speech/{voice_id}`. Unlike the
//! other gateway operations, speech has no canned audio fallback: failures
//! surface to the caller so the client can swap to on-device synthesis.

use bytes::Bytes;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::config::ElevenLabsConfig;
use crate::errors::{AppError, AppResult};

/// Default voice used when the request omits `voiceId`
pub const DEFAULT_VOICE_ID: &str = "21m00Tcm4TlvDq8ikWAM";

/// Fixed synthesis model
const SPEECH_MODEL: &str = "eleven_monolingual_v1";

/// Synthesis request body
#[derive(Debug, Serialize)]
struct SpeechBody<'a> {
    text: &'a str,
    model_id: &'static str,
    voice_settings: VoiceSettings,
}

/// Fixed voice tuning parameters
#[derive(Debug, Serialize)]
struct VoiceSettings {
    stability: f32,
    similarity_boost: f32,
}

impl Default for VoiceSettings {
    fn default() -> Self {
        Self {
            stability: 0.5,
            similarity_boost: 0.75,
        }
    }
}

/// ElevenLabs text-to-speech client
pub struct ElevenLabsProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ElevenLabsProvider {
    /// Create a provider with an explicit key, base URL, and call timeout
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: String, base_url: String, timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Create a provider from configuration, if a credential is present
    ///
    /// `None` is the supported unconfigured mode, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be constructed.
    pub fn from_config(config: &ElevenLabsConfig, timeout: Duration) -> AppResult<Option<Self>> {
        config.api_key.as_ref().map_or(Ok(None), |key| {
            Self::new(key.clone(), config.base_url.clone(), timeout).map(Some)
        })
    }

    /// Synthesize speech and return the raw audio bytes (`audio/mpeg`)
    ///
    /// # Errors
    ///
    /// Returns an error on any transport fault or non-success status; the
    /// speech route maps this to an explicit 500 so the caller falls back
    /// to on-device synthesis.
    #[instrument(skip(self, text), fields(voice_id = voice_id, chars = text.len()))]
    pub async fn synthesize(&self, text: &str, voice_id: &str) -> AppResult<Bytes> {
        debug!("Sending speech synthesis request to ElevenLabs");

        let body = SpeechBody {
            text,
            model_id: SPEECH_MODEL,
            voice_settings: VoiceSettings::default(),
        };

        let response = self
            .client
            .post(format!("{}/text-to-speech/{voice_id}", self.base_url))
            .header("Content-Type", "application/json")
            .header("xi-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to ElevenLabs API: {}", e);
                AppError::external_service("ElevenLabs", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            error!("ElevenLabs API error: {}", status);
            return Err(AppError::external_service(
                "ElevenLabs",
                format!("API error ({status})"),
            ));
        }

        let audio = response.bytes().await.map_err(|e| {
            error!("Failed to read ElevenLabs audio payload: {}", e);
            AppError::external_service("ElevenLabs", format!("Failed to read audio: {e}"))
        })?;

        debug!("Received {} bytes of audio from ElevenLabs", audio.len());
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_key() {
        let config = ElevenLabsConfig::default();
        let provider = ElevenLabsProvider::from_config(&config, Duration::from_secs(5)).unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn test_voice_settings_defaults() {
        let settings = VoiceSettings::default();
        assert!((settings.stability - 0.5).abs() < f32::EPSILON);
        assert!((settings.similarity_boost - 0.75).abs() < f32::EPSILON);
    }
}
