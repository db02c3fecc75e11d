// ABOUTME: Chat route handler for the AI coaching conversation endpoint
// ABOUTME: Single-turn completion pass-through with canned fallbacks when the provider is unavailable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Chat route for coaching conversations
//!
//! One endpoint, one outbound call. Every message is a fresh single-turn
//! completion; no conversation history is sent to the provider. Provider
//! failures never surface to the client as errors: the handler degrades to
//! a canned coaching reply picked by keyword, and transport faults degrade
//! to a generic advice message. Only a missing `message` field is an error.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::{AppError, ErrorCode};
use crate::fallback::{self, route_key};
use crate::models::ChatEnvelope;
use crate::providers::{ChatMessage, CompletionRequest};
use crate::resources::ServerResources;

/// System prompt sent with every chat completion
const CHAT_SYSTEM_PROMPT: &str = "You are an expert AI Fitness Coach. Provide helpful, motivational advice on fitness, nutrition, and wellness.";

/// Token cap for chat replies
const CHAT_MAX_TOKENS: u32 = 1024;

/// Request body for the chat endpoint
#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// User's message text
    #[serde(default)]
    pub message: Option<String>,
}

/// Chat routes handler
pub struct ChatRoutes;

impl ChatRoutes {
    /// Create the chat route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai-chat", post(Self::chat))
            .with_state(resources)
    }

    /// Handle a single-turn coaching message
    async fn chat(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ChatRequest>,
    ) -> Result<Json<ChatEnvelope>, AppError> {
        let message = request
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .ok_or_else(|| AppError::missing_field("Message"))?;

        let Some(provider) = resources.openai.as_ref() else {
            debug!("OpenAI not configured, returning static chat fallback");
            return Ok(Json(ChatEnvelope {
                response: fallback::CHAT_UNCONFIGURED.to_owned(),
            }));
        };

        let completion = CompletionRequest {
            messages: vec![
                ChatMessage::system(CHAT_SYSTEM_PROMPT),
                ChatMessage::user(message),
            ],
            max_tokens: CHAT_MAX_TOKENS,
        };

        match provider.complete(&completion).await {
            Ok(reply) => Ok(Json(ChatEnvelope { response: reply })),
            Err(e) if e.code == ErrorCode::ExternalServiceError => {
                warn!("Chat provider returned an error, degrading to keyword reply: {e}");
                Ok(Json(ChatEnvelope {
                    response: fallback::coaching_reply(route_key(message)).to_owned(),
                }))
            }
            Err(e) => {
                warn!("Chat provider unreachable, degrading to generic advice: {e}");
                Ok(Json(ChatEnvelope {
                    response: fallback::CHAT_TRANSPORT_FAULT.to_owned(),
                }))
            }
        }
    }
}
