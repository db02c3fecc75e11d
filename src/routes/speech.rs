// ABOUTME: Text-to-speech route handler streaming synthesized MP3 audio
// ABOUTME: The only endpoint that surfaces provider failures as HTTP errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Text-to-speech route
//!
//! Speech breaks the fallback pattern used everywhere else in the gateway:
//! the server cannot synthesize audio on its own, so instead of a canned
//! payload it signals failure explicitly. An unconfigured credential is 503
//! and a failed synthesis call is 500; the client reads either as the cue
//! to switch to on-device synthesis.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::providers::elevenlabs::DEFAULT_VOICE_ID;
use crate::resources::ServerResources;

/// Cache policy for synthesized audio
const AUDIO_CACHE_CONTROL: &str = "public, max-age=3600";

/// Request body for the speech endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechRequest {
    /// Text to synthesize
    #[serde(default)]
    pub text: Option<String>,
    /// Voice to use, defaults to the standard coaching voice
    #[serde(default)]
    pub voice_id: Option<String>,
}

/// Speech routes handler
pub struct SpeechRoutes;

impl SpeechRoutes {
    /// Create the text-to-speech route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/text-to-speech", post(Self::synthesize))
            .with_state(resources)
    }

    /// Handle a speech synthesis request
    async fn synthesize(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<SpeechRequest>,
    ) -> Result<Response, AppError> {
        let text = request
            .text
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AppError::missing_field("Text"))?;

        let Some(provider) = resources.elevenlabs.as_ref() else {
            debug!("ElevenLabs not configured, signalling on-device fallback");
            return Err(AppError::service_unconfigured(
                "ElevenLabs not configured, using browser TTS",
            ));
        };

        let voice_id = request.voice_id.as_deref().unwrap_or(DEFAULT_VOICE_ID);

        let audio = provider.synthesize(text, voice_id).await.map_err(|e| {
            warn!("Speech synthesis failed: {e}");
            AppError::internal("Internal server error")
        })?;

        Ok((
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "audio/mpeg"),
                (header::CACHE_CONTROL, AUDIO_CACHE_CONTROL),
            ],
            audio,
        )
            .into_response())
    }
}
