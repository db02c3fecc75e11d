// ABOUTME: Tests for the voice playback strategies using fake engine, client, and sink seams
// ABOUTME: Covers device state transitions and the remote strategy's transparent fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use bytes::Bytes;
use forma_coach_server::errors::{AppError, AppResult};
use forma_coach_server::voice::{
    AudioSink, DeviceVoice, RemoteVoice, SpeechEngine, SpeechSynthesisClient, VoicePlayback,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Engine that records utterances and cancellations
#[derive(Default)]
struct FakeEngine {
    spoken: Mutex<Vec<String>>,
    cancels: AtomicUsize,
}

#[async_trait]
impl SpeechEngine for FakeEngine {
    async fn speak(&self, text: &str, _rate: f32) -> AppResult<()> {
        self.spoken.lock().unwrap().push(text.to_owned());
        Ok(())
    }

    fn cancel(&self) {
        self.cancels.fetch_add(1, Ordering::SeqCst);
    }
}

/// Synthesis client returning fixed audio or a fixed failure
struct FakeSpeechClient {
    result: Result<Vec<u8>, &'static str>,
    requests: Mutex<Vec<(String, String)>>,
}

impl FakeSpeechClient {
    fn ok(audio: &[u8]) -> Self {
        Self {
            result: Ok(audio.to_vec()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn failing(reason: &'static str) -> Self {
        Self {
            result: Err(reason),
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl SpeechSynthesisClient for FakeSpeechClient {
    async fn fetch_audio(&self, text: &str, voice_id: &str) -> AppResult<Bytes> {
        self.requests
            .lock()
            .unwrap()
            .push((text.to_owned(), voice_id.to_owned()));
        match &self.result {
            Ok(audio) => Ok(Bytes::from(audio.clone())),
            Err(reason) => Err(AppError::external_service("speech endpoint", *reason)),
        }
    }
}

/// Sink that records played payloads; can be made to fail
#[derive(Default)]
struct FakeSink {
    played: Mutex<Vec<Bytes>>,
    stops: AtomicUsize,
    fail: bool,
}

impl FakeSink {
    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

#[async_trait]
impl AudioSink for FakeSink {
    async fn play(&self, audio: Bytes) -> AppResult<()> {
        if self.fail {
            return Err(AppError::internal("audio device busy"));
        }
        self.played.lock().unwrap().push(audio);
        Ok(())
    }

    fn stop(&self) {
        self.stops.fetch_add(1, Ordering::SeqCst);
    }
}

#[tokio::test]
async fn test_device_voice_speaks_through_engine() {
    let engine = Arc::new(FakeEngine::default());
    let voice = DeviceVoice::new(engine.clone());

    voice.speak("Great squat depth!").await.unwrap();

    assert_eq!(
        *engine.spoken.lock().unwrap(),
        vec!["Great squat depth!".to_owned()]
    );
    assert!(!voice.is_playing());
}

#[tokio::test]
async fn test_device_voice_cancels_before_each_utterance() {
    let engine = Arc::new(FakeEngine::default());
    let voice = DeviceVoice::new(engine.clone());

    voice.speak("first").await.unwrap();
    voice.speak("second").await.unwrap();

    // One cancel per speak call
    assert_eq!(engine.cancels.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_device_voice_stop_cancels_engine() {
    let engine = Arc::new(FakeEngine::default());
    let voice = DeviceVoice::new(engine.clone());

    voice.stop();

    assert_eq!(engine.cancels.load(Ordering::SeqCst), 1);
    assert!(!voice.is_playing());
}

#[tokio::test]
async fn test_remote_voice_plays_fetched_audio() {
    let client = Arc::new(FakeSpeechClient::ok(b"mp3-bytes"));
    let sink = Arc::new(FakeSink::default());
    let engine = Arc::new(FakeEngine::default());
    let voice = RemoteVoice::new(
        client.clone(),
        sink.clone(),
        DeviceVoice::new(engine.clone()),
    );

    voice.speak("Time to stretch").await.unwrap();

    assert_eq!(
        *client.requests.lock().unwrap(),
        vec![("Time to stretch".to_owned(), "21m00Tcm4TlvDq8ikWAM".to_owned())]
    );
    assert_eq!(*sink.played.lock().unwrap(), vec![Bytes::from_static(b"mp3-bytes")]);
    // Device engine never touched on the happy path
    assert!(engine.spoken.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_remote_voice_uses_configured_voice_id() {
    let client = Arc::new(FakeSpeechClient::ok(b""));
    let voice = RemoteVoice::with_voice(
        client.clone(),
        Arc::new(FakeSink::default()),
        DeviceVoice::new(Arc::new(FakeEngine::default())),
        "custom-voice",
    );

    voice.speak("hello").await.unwrap();

    assert_eq!(client.requests.lock().unwrap()[0].1, "custom-voice");
}

#[tokio::test]
async fn test_remote_voice_falls_back_when_fetch_fails() {
    let client = Arc::new(FakeSpeechClient::failing("TTS API error (503)"));
    let sink = Arc::new(FakeSink::default());
    let engine = Arc::new(FakeEngine::default());
    let voice = RemoteVoice::new(client, sink.clone(), DeviceVoice::new(engine.clone()));

    voice.speak("Time to stretch").await.unwrap();

    assert!(sink.played.lock().unwrap().is_empty());
    assert_eq!(
        *engine.spoken.lock().unwrap(),
        vec!["Time to stretch".to_owned()]
    );
}

#[tokio::test]
async fn test_remote_voice_falls_back_when_playback_fails() {
    let client = Arc::new(FakeSpeechClient::ok(b"mp3-bytes"));
    let sink = Arc::new(FakeSink::failing());
    let engine = Arc::new(FakeEngine::default());
    let voice = RemoteVoice::new(client, sink, DeviceVoice::new(engine.clone()));

    voice.speak("Time to stretch").await.unwrap();

    assert_eq!(
        *engine.spoken.lock().unwrap(),
        vec!["Time to stretch".to_owned()]
    );
}

#[tokio::test]
async fn test_remote_voice_stop_reaches_both_strategies() {
    let sink = Arc::new(FakeSink::default());
    let engine = Arc::new(FakeEngine::default());
    let voice = RemoteVoice::new(
        Arc::new(FakeSpeechClient::ok(b"")),
        sink.clone(),
        DeviceVoice::new(engine.clone()),
    );

    voice.stop();

    assert_eq!(sink.stops.load(Ordering::SeqCst), 1);
    assert_eq!(engine.cancels.load(Ordering::SeqCst), 1);
    assert!(!voice.is_playing());
}
