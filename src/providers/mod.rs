// ABOUTME: Outbound provider client layer for completions, images, and speech
// ABOUTME: Shared message/request types plus one client module per upstream service
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # Provider clients
//!
//! Thin clients for the two upstream services: OpenAI (chat completions and
//! image generation) and ElevenLabs (speech synthesis). Each operation is a
//! single request with a single response: no retry, no backoff, no
//! streaming. Selection is static per endpoint; callers hold an
//! `Option<Provider>` and treat `None` as the supported unconfigured mode.
//!
//! Failure policy lives with the callers, not here: these clients return
//! `Err` on any provider or transport fault, and the routes decide whether
//! that degrades to a canned payload (chat, plan, image) or surfaces as an
//! explicit error (speech).

pub mod elevenlabs;
pub mod openai;

pub use elevenlabs::ElevenLabsProvider;
pub use openai::OpenAiProvider;

use serde::{Deserialize, Serialize};

/// Role of a message sent to the completion provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    /// System instruction message
    System,
    /// User input message
    User,
    /// Assistant response message
    Assistant,
}

impl MessageRole {
    /// Convert to string representation for API calls
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

/// A single message in a completion request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender
    pub role: MessageRole,
    /// Content of the message
    pub content: String,
}

impl ChatMessage {
    /// Create a new chat message
    #[must_use]
    pub fn new(role: MessageRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(MessageRole::System, content)
    }

    /// Create a user message
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(MessageRole::User, content)
    }
}

/// Configuration for a chat completion request
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// Conversation messages
    pub messages: Vec<ChatMessage>,
    /// Maximum tokens to generate
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a new completion request
    #[must_use]
    pub const fn new(messages: Vec<ChatMessage>, max_tokens: u32) -> Self {
        Self {
            messages,
            max_tokens,
        }
    }
}
