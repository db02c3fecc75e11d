// ABOUTME: Canned fallback payloads and keyword routing for the provider gateway
// ABOUTME: Every provider-facing operation degrades to a deterministic payload from here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # Fallback payloads
//!
//! The gateway contract guarantees that chat, plan, and image requests never
//! surface a provider failure: whenever the provider is unconfigured, replies
//! with a non-success status, or is unreachable, the caller receives one of
//! the static payloads defined here with a success status.
//!
//! Chat and plan fallbacks are keyword-routed: the input is lowercased and
//! substring-matched against an ordered key list, first match wins. The
//! lookup table and its ordering are part of the external contract and must
//! not be reordered.

use serde_json::json;

/// Topic key selected by the keyword router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackKey {
    /// Calorie intake questions
    Calorie,
    /// Protein intake questions
    Protein,
    /// Rest and recovery questions
    Rest,
    /// Cardio training questions
    Cardio,
    /// Anything else
    Default,
}

/// Ordered routing table; earlier entries win when several keywords appear
const ROUTE_KEYS: &[(&str, FallbackKey)] = &[
    ("calorie", FallbackKey::Calorie),
    ("protein", FallbackKey::Protein),
    ("rest", FallbackKey::Rest),
    ("cardio", FallbackKey::Cardio),
];

/// Route a message to its fallback topic
///
/// Case-insensitive substring containment against the ordered key list;
/// no match yields [`FallbackKey::Default`].
#[must_use]
pub fn route_key(message: &str) -> FallbackKey {
    let lower = message.to_lowercase();
    ROUTE_KEYS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map_or(FallbackKey::Default, |(_, key)| *key)
}

/// Canned coaching reply for a routed topic (chat provider-error fallback)
#[must_use]
pub const fn coaching_reply(key: FallbackKey) -> &'static str {
    match key {
        FallbackKey::Calorie => {
            "Your daily calorie needs depend on your goal. For weight loss: eat 300-500 calories below maintenance. For muscle gain: eat 300-500 calories above maintenance. Use your profile data to calculate your maintenance calories."
        }
        FallbackKey::Protein => {
            "Protein intake: Aim for 1.6-2.2g per kg of body weight daily. This supports muscle recovery and growth. Distribute protein across your meals for optimal protein synthesis."
        }
        FallbackKey::Rest => {
            "Rest days are crucial! Take 1-2 rest days per week to allow muscle recovery. Active recovery like light walking or yoga can be beneficial on rest days."
        }
        FallbackKey::Cardio => {
            "Cardio recommendations: For fat loss, 150-300 minutes per week of moderate cardio. For general fitness, 150 minutes per week is ideal. Balance with strength training."
        }
        FallbackKey::Default => {
            "Based on your fitness profile, I recommend: Progressive overload in your workouts, consistent nutrition tracking, and adequate rest days. What specific area would you like help with?"
        }
    }
}

/// Chat reply when no provider credential is configured
pub const CHAT_UNCONFIGURED: &str = "API is not configured. Try asking questions like 'How many calories should I eat?' or 'What exercises target chest?'";

/// Chat reply when the provider call itself fails (timeout, DNS, parse)
pub const CHAT_TRANSPORT_FAULT: &str = "I'm having trouble reaching the AI service. Here's some general advice: Stay hydrated, maintain consistent workouts, and track your nutrition. Feel free to ask more specific questions!";

/// Fallback plan when no provider credential is configured
///
/// Returned as a JSON-encoded string: clients parse the `plan` field
/// themselves, so the envelope carries text rather than an object.
#[must_use]
pub fn unconfigured_plan() -> String {
    json!({
        "weeklyWorkout": [
            { "day": "Monday", "focus": "Upper Body", "exercises": ["Push-ups", "Rows", "Shoulder Press"] },
            { "day": "Wednesday", "focus": "Lower Body", "exercises": ["Squats", "Lunges", "Leg Press"] },
            { "day": "Friday", "focus": "Full Body", "exercises": ["Deadlifts", "Pull-ups", "Planks"] },
        ],
        "mealPlan": {
            "Monday": {
                "breakfast": "Oatmeal with berries (450 cal, 15g protein)",
                "lunch": "Grilled chicken with rice (600 cal, 35g protein)",
                "dinner": "Salmon with vegetables (550 cal, 40g protein)",
            },
        },
        "tips": "Stay consistent, track your workouts, eat enough protein, and get adequate rest.",
    })
    .to_string()
}

/// Fallback plan when the provider replies with a non-success status
///
/// The `tips` line is keyword-routed through the shared table using the
/// profile's goal text, so the degraded plan stays topically relevant.
#[must_use]
pub fn provider_error_plan(goal_text: &str) -> String {
    let tips = match route_key(goal_text) {
        FallbackKey::Default => "Progressive overload, recovery, and consistency are key to success.",
        key => coaching_reply(key),
    };

    json!({
        "weeklyWorkout": [
            { "day": "Monday", "focus": "Strength Training", "exercises": ["Compound lifts", "Core work"] },
            { "day": "Wednesday", "focus": "Cardio & Flexibility", "exercises": ["Running or cycling", "Stretching"] },
            { "day": "Friday", "focus": "Functional Fitness", "exercises": ["Functional movements", "Conditioning"] },
        ],
        "mealPlan": {
            "default": "Follow balanced macros: 40% carbs, 30% protein, 30% fat. Track calories based on your goal.",
        },
        "tips": tips,
    })
    .to_string()
}

/// Fallback plan when the provider call itself fails
#[must_use]
pub fn transport_fault_plan() -> String {
    json!({
        "message": "Using default fitness plan. Customize based on your preferences.",
        "quickTips": [
            "Warm up for 5-10 minutes before workouts",
            "Rest 60-90 seconds between sets",
            "Eat protein with every meal",
            "Stay hydrated throughout the day",
        ],
    })
    .to_string()
}

/// Placeholder image path with the prompt URL-encoded into the query
#[must_use]
pub fn placeholder_image_url(prompt: &str) -> String {
    format!(
        "/placeholder.svg?height=1024&width=1024&query={}",
        urlencoding::encode(prompt)
    )
}
