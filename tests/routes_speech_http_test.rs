// ABOUTME: Integration tests for the text-to-speech endpoint
// ABOUTME: Covers validation, the 503 unconfigured signal, audio pass-through, and 500 on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod helpers;

use axum::{extract::Path, routing::post, Router};
use forma_coach_server::config::environment::{ElevenLabsConfig, ServerConfig};
use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};

fn config_with_elevenlabs(base_url: String) -> ServerConfig {
    ServerConfig {
        elevenlabs: ElevenLabsConfig {
            api_key: Some("el-test".into()),
            base_url,
        },
        ..ServerConfig::default()
    }
}

#[tokio::test]
async fn test_speech_missing_text_is_400() {
    let app = helpers::test_router();

    let response = AxumTestRequest::post("/api/text-to-speech")
        .json(&json!({}))
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Text is required");
}

#[tokio::test]
async fn test_speech_unconfigured_is_503() {
    let app = helpers::test_router();

    let response = AxumTestRequest::post("/api/text-to-speech")
        .json(&json!({"text": "Great workout!"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 503);
    let body: Value = response.json();
    assert_eq!(
        body["error"]["message"],
        "ElevenLabs not configured, using browser TTS"
    );
}

#[tokio::test]
async fn test_speech_success_streams_audio_with_default_voice() {
    let seen_voice = Arc::new(Mutex::new(String::new()));
    let seen = seen_voice.clone();

    let stub = Router::new().route(
        "/text-to-speech/:voice_id",
        post(move |Path(voice_id): Path<String>| {
            let seen = seen.clone();
            async move {
                *seen.lock().unwrap() = voice_id;
                vec![0x49, 0x44, 0x33, 0x04]
            }
        }),
    );
    let base_url = helpers::spawn_stub_provider(stub).await;
    let app = helpers::test_router_with_config(config_with_elevenlabs(base_url));

    let response = AxumTestRequest::post("/api/text-to-speech")
        .json(&json!({"text": "Great workout!"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(response.bytes(), vec![0x49, 0x44, 0x33, 0x04]);
    assert_eq!(*seen_voice.lock().unwrap(), "21m00Tcm4TlvDq8ikWAM");
}

#[tokio::test]
async fn test_speech_honors_requested_voice() {
    let seen_voice = Arc::new(Mutex::new(String::new()));
    let seen = seen_voice.clone();

    let stub = Router::new().route(
        "/text-to-speech/:voice_id",
        post(move |Path(voice_id): Path<String>| {
            let seen = seen.clone();
            async move {
                *seen.lock().unwrap() = voice_id;
                Vec::<u8>::new()
            }
        }),
    );
    let base_url = helpers::spawn_stub_provider(stub).await;
    let app = helpers::test_router_with_config(config_with_elevenlabs(base_url));

    let response = AxumTestRequest::post("/api/text-to-speech")
        .json(&json!({"text": "Nice pace", "voiceId": "custom-voice"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert_eq!(*seen_voice.lock().unwrap(), "custom-voice");
}

#[tokio::test]
async fn test_speech_provider_error_is_500() {
    let stub = Router::new().route(
        "/text-to-speech/:voice_id",
        post(|| async { (axum::http::StatusCode::UNAUTHORIZED, "bad key") }),
    );
    let base_url = helpers::spawn_stub_provider(stub).await;
    let app = helpers::test_router_with_config(config_with_elevenlabs(base_url));

    let response = AxumTestRequest::post("/api/text-to-speech")
        .json(&json!({"text": "Great workout!"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 500);
    let body: Value = response.json();
    assert_eq!(body["error"]["message"], "Internal server error");
}
