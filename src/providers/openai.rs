// ABOUTME: OpenAI provider client for chat completions and image generation
// ABOUTME: Single-request calls with fixed shapes (gpt-3.5-turbo, dall-e-3)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # OpenAI Provider
//!
//! Backs three gateway operations: chat, plan generation (both via chat
//! completions), and image generation. Request shapes are fixed: model
//! name, token limits, and image size/quality are not caller-tunable.
//!
//! ## Configuration
//!
//! `OPENAI_API_KEY` supplies the credential; `OPENAI_BASE_URL` may point at
//! any OpenAI-compatible gateway (used by tests).

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, instrument};

use super::{ChatMessage, CompletionRequest};
use crate::config::OpenAiConfig;
use crate::errors::{AppError, AppResult};

/// Model used for chat and plan completions
const CHAT_MODEL: &str = "gpt-3.5-turbo";

/// Model used for image generation
const IMAGE_MODEL: &str = "dall-e-3";

/// Fixed image dimensions
const IMAGE_SIZE: &str = "1024x1024";

/// Fixed image quality tier
const IMAGE_QUALITY: &str = "standard";

// ============================================================================
// API Request/Response Types
// ============================================================================

/// Chat completion request body
#[derive(Debug, Serialize)]
struct CompletionBody {
    model: String,
    max_tokens: u32,
    messages: Vec<WireMessage>,
}

/// Message structure on the wire
#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

impl From<&ChatMessage> for WireMessage {
    fn from(msg: &ChatMessage) -> Self {
        Self {
            role: msg.role.as_str().to_owned(),
            content: msg.content.clone(),
        }
    }
}

/// Chat completion response body
#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    content: Option<String>,
}

/// Image generation request body
#[derive(Debug, Serialize)]
struct ImageBody {
    model: String,
    prompt: String,
    n: u32,
    size: String,
    quality: String,
}

/// Image generation response body
#[derive(Debug, Deserialize)]
struct ImageResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: String,
}

// ============================================================================
// Provider Implementation
// ============================================================================

/// OpenAI client for completions and image generation
pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl OpenAiProvider {
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
    pub fn from_config(config: &OpenAiConfig, timeout: Duration) -> AppResult<Option<Self>> {
        config.api_key.as_ref().map_or(Ok(None), |key| {
            Self::new(key.clone(), config.base_url.clone(), timeout).map(Some)
        })
    }

    /// Build the API URL for a given endpoint
    fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{endpoint}", self.base_url)
    }

    /// Perform a chat completion and return the assistant's text
    ///
    /// # Errors
    ///
    /// Returns an error on any transport fault, non-success status, or
    /// malformed response. The caller decides how that degrades.
    #[instrument(skip(self, request), fields(messages = request.messages.len()))]
    pub async fn complete(&self, request: &CompletionRequest) -> AppResult<String> {
        debug!("Sending chat completion request to OpenAI");

        let body = CompletionBody {
            model: CHAT_MODEL.to_owned(),
            max_tokens: request.max_tokens,
            messages: request.messages.iter().map(WireMessage::from).collect(),
        };

        let response = self
            .client
            .post(self.api_url("chat/completions"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to OpenAI API: {}", e);
                AppError::service_unreachable("OpenAI", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            error!("Failed to read OpenAI API response: {}", e);
            AppError::service_unreachable("OpenAI", format!("Failed to read response: {e}"))
        })?;

        if !status.is_success() {
            error!("OpenAI API error ({}): {}", status, truncate(&text, 500));
            return Err(AppError::external_service(
                "OpenAI",
                format!("API error ({status})"),
            ));
        }

        let parsed: CompletionResponse = serde_json::from_str(&text).map_err(|e| {
            error!("Failed to parse OpenAI API response: {}", e);
            AppError::service_unreachable("OpenAI", format!("Failed to parse response: {e}"))
        })?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| AppError::service_unreachable("OpenAI", "API returned no choices"))?;

        debug!("Received completion from OpenAI: {} chars", content.len());
        Ok(content)
    }

    /// Generate one image and return its hosted URL
    ///
    /// # Errors
    ///
    /// Returns an error on any transport fault, non-success status, or
    /// malformed response.
    #[instrument(skip(self, prompt))]
    pub async fn generate_image(&self, prompt: &str) -> AppResult<String> {
        debug!("Sending image generation request to OpenAI");

        let body = ImageBody {
            model: IMAGE_MODEL.to_owned(),
            prompt: prompt.to_owned(),
            n: 1,
            size: IMAGE_SIZE.to_owned(),
            quality: IMAGE_QUALITY.to_owned(),
        };

        let response = self
            .client
            .post(self.api_url("images/generations"))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("Failed to send request to OpenAI images API: {}", e);
                AppError::service_unreachable("OpenAI", format!("Failed to connect: {e}"))
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            error!(
                "OpenAI images API error ({}): {}",
                status,
                truncate(&text, 500)
            );
            return Err(AppError::external_service(
                "OpenAI",
                format!("Image API error ({status})"),
            ));
        }

        let parsed: ImageResponse = response.json().await.map_err(|e| {
            error!("Failed to parse OpenAI images response: {}", e);
            AppError::service_unreachable("OpenAI", format!("Failed to parse response: {e}"))
        })?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.url)
            .ok_or_else(|| AppError::service_unreachable("OpenAI", "API returned no images"))
    }
}

/// Truncate provider error bodies before logging
fn truncate(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_without_key() {
        let config = OpenAiConfig::default();
        let provider = OpenAiProvider::from_config(&config, Duration::from_secs(5)).unwrap();
        assert!(provider.is_none());
    }

    #[test]
    fn test_from_config_with_key() {
        let config = OpenAiConfig {
            api_key: Some("sk-test".into()),
            ..OpenAiConfig::default()
        };
        let provider = OpenAiProvider::from_config(&config, Duration::from_secs(5)).unwrap();
        assert!(provider.is_some());
    }

    #[test]
    fn test_api_url_joins_endpoint() {
        let provider = OpenAiProvider::new(
            "sk-test".into(),
            "https://api.openai.com/v1".into(),
            Duration::from_secs(5),
        )
        .unwrap();
        assert_eq!(
            provider.api_url("chat/completions"),
            "https://api.openai.com/v1/chat/completions"
        );
    }
}
