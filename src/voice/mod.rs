// ABOUTME: Voice playback capability with device and remote synthesis strategies
// ABOUTME: Platform seams (engine, synthesis client, audio sink) are injected traits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # Voice playback
//!
//! Spoken coaching replies run through one of two strategies chosen at
//! construction. [`DeviceVoice`] hands text to an on-device synthesis
//! engine. [`RemoteVoice`] fetches rendered audio from the text-to-speech
//! endpoint and plays it through an audio sink, falling back transparently
//! to the device strategy when anything along that path fails.
//!
//! The platform-facing pieces are traits so the strategies can be driven
//! entirely by fakes in tests. No audio hardware is touched by this crate.

mod device;
mod remote;

pub use device::DeviceVoice;
pub use remote::{HttpSpeechClient, RemoteVoice};

use async_trait::async_trait;
use bytes::Bytes;

use crate::errors::AppResult;

/// Default speech rate for on-device synthesis
pub const DEFAULT_SPEECH_RATE: f32 = 1.0;

/// A voice strategy the coaching UI can speak through
#[async_trait]
pub trait VoicePlayback: Send + Sync {
    /// Speak the given text, returning once playback finishes or is cancelled
    async fn speak(&self, text: &str) -> AppResult<()>;

    /// Cancel any in-flight playback immediately
    fn stop(&self);

    /// Whether playback is currently underway
    fn is_playing(&self) -> bool;
}

/// On-device speech synthesis seam
///
/// `speak` resolves when the utterance finishes; `cancel` interrupts it.
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Synthesize and play the text at the given rate
    async fn speak(&self, text: &str, rate: f32) -> AppResult<()>;

    /// Cancel the current utterance, if any
    fn cancel(&self);
}

/// Remote synthesis seam, normally backed by the text-to-speech endpoint
#[async_trait]
pub trait SpeechSynthesisClient: Send + Sync {
    /// Fetch rendered `audio/mpeg` bytes for the text and voice
    async fn fetch_audio(&self, text: &str, voice_id: &str) -> AppResult<Bytes>;
}

/// Playback seam for rendered audio
#[async_trait]
pub trait AudioSink: Send + Sync {
    /// Play the audio to completion
    async fn play(&self, audio: Bytes) -> AppResult<()>;

    /// Stop playback immediately
    fn stop(&self);
}
