// ABOUTME: Plan generation route handler producing workout and meal plans from a profile
// ABOUTME: Renders the profile into a completion prompt and falls back to canned plan documents
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Plan generation route
//!
//! Takes a full user profile, renders it into a single prompt, and asks the
//! completion provider for a combined workout and meal plan. The `plan`
//! field of the response is always a string; when the provider cooperates
//! it is whatever text came back, and in every degraded mode it is a
//! JSON-encoded plan document the client can parse.

use axum::{extract::State, routing::post, Json, Router};
use std::fmt::Write as _;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::errors::ErrorCode;
use crate::fallback;
use crate::models::{PlanEnvelope, UserProfile};
use crate::providers::{ChatMessage, CompletionRequest};
use crate::resources::ServerResources;

/// System prompt sent with every plan completion
const PLAN_SYSTEM_PROMPT: &str = "You are an expert fitness coach and nutritionist. Create detailed, personalized plans based on user profiles.";

/// Token cap for plan replies, higher than chat since plans are long
const PLAN_MAX_TOKENS: u32 = 4096;

/// Plan generation routes handler
pub struct PlanRoutes;

impl PlanRoutes {
    /// Create the plan generation route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/ai-plan-generation", post(Self::generate_plan))
            .with_state(resources)
    }

    /// Render the profile into the completion prompt
    fn build_prompt(profile: &UserProfile) -> String {
        let mut prompt = format!(
            "Create a personalized fitness and meal plan for:\n\
             Name: {}\n\
             Age: {}\n\
             Gender: {}\n\
             Height: {}cm\n\
             Weight: {}kg\n\
             Fitness Level: {}\n\
             Goal: {}\n\
             Workout Location: {}\n\
             Dietary Preferences: {}\n",
            profile.name,
            profile.age,
            profile.gender,
            profile.height,
            profile.weight,
            profile.fitness_level,
            profile.goal,
            profile.workout_location,
            profile.dietary_preferences,
        );

        if let Some(history) = profile.medical_history.as_deref().filter(|h| !h.is_empty()) {
            let _ = writeln!(prompt, "Medical History: {history}");
        }
        if let Some(stress) = profile.stress_level.as_deref().filter(|s| !s.is_empty()) {
            let _ = writeln!(prompt, "Stress Level: {stress}");
        }

        prompt.push_str(
            "\nPlease provide:\n\
             1. A detailed weekly workout plan with exercises, sets, reps, and rest times\n\
             2. A complete meal plan with breakfast, lunch, dinner, and snacks with macros\n\
             3. Tips for form, motivation, and nutrition\n\n\
             Format the response as JSON.",
        );
        prompt
    }

    /// Handle a plan generation request
    async fn generate_plan(
        State(resources): State<Arc<ServerResources>>,
        Json(profile): Json<UserProfile>,
    ) -> Json<PlanEnvelope> {
        let Some(provider) = resources.openai.as_ref() else {
            debug!("OpenAI not configured, returning static plan fallback");
            return Json(PlanEnvelope {
                plan: fallback::unconfigured_plan(),
            });
        };

        let completion = CompletionRequest {
            messages: vec![
                ChatMessage::system(PLAN_SYSTEM_PROMPT),
                ChatMessage::user(Self::build_prompt(&profile)),
            ],
            max_tokens: PLAN_MAX_TOKENS,
        };

        match provider.complete(&completion).await {
            Ok(plan) => Json(PlanEnvelope { plan }),
            Err(e) if e.code == ErrorCode::ExternalServiceError => {
                warn!("Plan provider returned an error, degrading to canned plan: {e}");
                Json(PlanEnvelope {
                    plan: fallback::provider_error_plan(&profile.goal),
                })
            }
            Err(e) => {
                warn!("Plan provider unreachable, degrading to default plan: {e}");
                Json(PlanEnvelope {
                    plan: fallback::transport_fault_plan(),
                })
            }
        }
    }
}
