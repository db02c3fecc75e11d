// ABOUTME: Core data structures for profiles, sessions, and progress metrics
// ABOUTME: Wire field names are camelCase to match the documented client contract
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Core data model
//!
//! Everything that crosses the HTTP boundary or the session store lives
//! here. Field names serialize as camelCase (`fitnessLevel`, `imageUrl`)
//! because that is the shape clients already persist and send.

use serde::{Deserialize, Serialize};

/// User fitness profile, created once at onboarding
///
/// Immutable thereafter except via full replacement; mirrored into the
/// persisted session document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Age in years
    pub age: u32,
    /// Self-reported gender
    pub gender: String,
    /// Height in centimeters
    pub height: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// Fitness level (beginner, intermediate, advanced)
    pub fitness_level: String,
    /// Primary goal (weight-loss, muscle-gain, endurance, ...)
    pub goal: String,
    /// Where workouts happen (home, gym, outdoors)
    pub workout_location: String,
    /// Dietary preference or restrictions
    pub dietary_preferences: String,
    /// Optional medical history notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medical_history: Option<String>,
    /// Optional self-reported stress level
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress_level: Option<String>,
}

/// Which step of the four-step wizard the client is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    /// Profile onboarding form
    #[default]
    Form,
    /// Workout plan display
    Workout,
    /// Meal plan display
    Meal,
    /// Progress dashboard
    Progress,
}

/// One week of tracked progress
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressMetric {
    /// Week label ("Week 1", "Week 2", ...)
    pub week: String,
    /// Body weight in kilograms
    pub weight: f64,
    /// Calories burned that week
    pub calories: u32,
    /// Workout sessions completed that week
    pub workouts: u32,
}

/// The single persisted session document
///
/// Last-write-wins, no versioning, no migration path: any stored shape that
/// fails to parse as JSON is treated as absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    /// The onboarded user profile
    pub profile: UserProfile,
    /// Wizard position to restore on reload
    pub current_step: WizardStep,
    /// Tracked progress series, if the user reached the dashboard
    #[serde(default)]
    pub progress_data: Option<Vec<ProgressMetric>>,
    /// Write time in Unix milliseconds
    pub timestamp: i64,
}

// ============================================================================
// Provider response envelopes
// ============================================================================

/// Envelope for the chat endpoint: `{response}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatEnvelope {
    /// Assistant answer or canned fallback
    pub response: String,
}

/// Envelope for the plan endpoint: `{plan}` where `plan` is a JSON-encoded
/// plan document (a string, not an object; clients parse it themselves)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEnvelope {
    /// JSON-encoded plan
    pub plan: String,
}

/// Envelope for the image endpoint: `{imageUrl}`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageEnvelope {
    /// Provider-hosted URL or local placeholder path
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Alex".into(),
            age: 31,
            gender: "female".into(),
            height: 170.0,
            weight: 72.5,
            fitness_level: "beginner".into(),
            goal: "weight-loss".into(),
            workout_location: "home".into(),
            dietary_preferences: "vegetarian".into(),
            medical_history: None,
            stress_level: Some("moderate".into()),
        }
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let value = serde_json::to_value(sample_profile()).unwrap();
        assert_eq!(value["fitnessLevel"], "beginner");
        assert_eq!(value["workoutLocation"], "home");
        assert_eq!(value["dietaryPreferences"], "vegetarian");
        // Absent optional fields are omitted entirely
        assert!(value.get("medicalHistory").is_none());
    }

    #[test]
    fn test_session_round_trip() {
        let session = PersistedSession {
            profile: sample_profile(),
            current_step: WizardStep::Meal,
            progress_data: Some(vec![ProgressMetric {
                week: "Week 1".into(),
                weight: 72.5,
                calories: 8500,
                workouts: 0,
            }]),
            timestamp: 1_735_689_600_000,
        };

        let encoded = serde_json::to_string(&session).unwrap();
        let decoded: PersistedSession = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, session);
    }

    #[test]
    fn test_wizard_step_wire_names() {
        assert_eq!(json!(WizardStep::Form), json!("form"));
        assert_eq!(json!(WizardStep::Progress), json!("progress"));
    }

    #[test]
    fn test_image_envelope_wire_name() {
        let value = serde_json::to_value(ImageEnvelope {
            image_url: "/placeholder.svg".into(),
        })
        .unwrap();
        assert_eq!(value["imageUrl"], "/placeholder.svg");
    }
}
