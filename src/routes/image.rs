// ABOUTME: Image generation route handler for exercise and food illustrations
// ABOUTME: Prefixes the prompt by image kind and falls back to a local placeholder URL
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Image generation route
//!
//! Generates one illustration per request. The caller's prompt is prefixed
//! by kind before it reaches the provider: exercise prompts become gym
//! demonstration shots, everything else is treated as food photography.
//! Any provider failure degrades to a placeholder URL built from the
//! caller's original prompt, so the client always gets a renderable image.

use axum::{extract::State, routing::post, Json, Router};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::AppError;
use crate::fallback::placeholder_image_url;
use crate::models::ImageEnvelope;
use crate::resources::ServerResources;

/// What the requested image depicts, steering the prompt prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    /// Gym exercise demonstration
    Exercise,
    /// Food photography (the default for anything unrecognized)
    #[default]
    #[serde(other)]
    Food,
}

/// Request body for the image endpoint
#[derive(Debug, Deserialize)]
pub struct ImageRequest {
    /// What to draw
    #[serde(default)]
    pub prompt: Option<String>,
    /// Image category
    #[serde(default, rename = "type")]
    pub kind: ImageKind,
}

/// Image generation routes handler
pub struct ImageRoutes;

impl ImageRoutes {
    /// Create the image generation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai-image-generation", post(Self::generate_image))
            .with_state(resources)
    }

    /// Build the provider prompt from the caller's prompt and kind
    fn provider_prompt(prompt: &str, kind: ImageKind) -> String {
        match kind {
            ImageKind::Exercise => format!("Professional gym exercise demonstration: {prompt}"),
            ImageKind::Food => format!("Food photography: {prompt}"),
        }
    }

    /// Handle an image generation request
    async fn generate_image(
        State(resources): State<Arc<ServerResources>>,
        Json(request): Json<ImageRequest>,
    ) -> Result<Json<ImageEnvelope>, AppError> {
        let prompt = request
            .prompt
            .as_deref()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| AppError::missing_field("Prompt"))?;

        let Some(provider) = resources.openai.as_ref() else {
            debug!("OpenAI not configured, returning placeholder image URL");
            return Ok(Json(ImageEnvelope {
                image_url: placeholder_image_url(prompt),
            }));
        };

        match provider
            .generate_image(&Self::provider_prompt(prompt, request.kind))
            .await
        {
            Ok(url) => Ok(Json(ImageEnvelope { image_url: url })),
            Err(e) => {
                warn!("Image provider failed, degrading to placeholder URL: {e}");
                Ok(Json(ImageEnvelope {
                    image_url: placeholder_image_url(prompt),
                }))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_prompt_prefix() {
        assert_eq!(
            ImageRoutes::provider_prompt("barbell squat", ImageKind::Exercise),
            "Professional gym exercise demonstration: barbell squat"
        );
    }

    #[test]
    fn test_food_prompt_prefix() {
        assert_eq!(
            ImageRoutes::provider_prompt("grilled salmon", ImageKind::Food),
            "Food photography: grilled salmon"
        );
    }

    #[test]
    fn test_kind_defaults_to_food() {
        let request: ImageRequest = serde_json::from_str(r#"{"prompt":"oatmeal"}"#).unwrap();
        assert_eq!(request.kind, ImageKind::Food);
    }

    #[test]
    fn test_unknown_kind_maps_to_food() {
        let request: ImageRequest =
            serde_json::from_str(r#"{"prompt":"squat","type":"banner"}"#).unwrap();
        assert_eq!(request.kind, ImageKind::Food);
    }

    #[test]
    fn test_kind_parses_exercise() {
        let request: ImageRequest =
            serde_json::from_str(r#"{"prompt":"squat","type":"exercise"}"#).unwrap();
        assert_eq!(request.kind, ImageKind::Exercise);
    }
}
