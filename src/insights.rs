// ABOUTME: Threshold-based progress analytics: insight rules, goals, achievements
// ABOUTME: Pure functions over the weekly progress series, no provider involvement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # Progress insights
//!
//! "AI insights" here are a handful of fixed threshold rules over the
//! in-memory weekly series, deterministic and side-effect free. The series
//! is seeded with four synthetic entries derived from the profile's
//! starting weight when the user first reaches the dashboard.

use crate::models::ProgressMetric;
use serde::{Deserialize, Serialize};

/// Goal weight offset: the dashboard targets starting weight minus 5 kg
const GOAL_WEIGHT_OFFSET_KG: f64 = 5.0;

/// Weekly loss rate considered "optimal" (kg/week, negative trend)
const OPTIMAL_LOSS_RATE: f64 = -0.3;

/// Total workouts below which the activity nudge fires
const LOW_ACTIVITY_THRESHOLD: u32 = 8;

/// Average weekly loss above which the projection insight fires
const PROJECTION_MIN_AVG_LOSS: f64 = 0.5;

/// Visual category of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    /// Positive reinforcement
    Success,
    /// Neutral observation or projection
    Info,
    /// Nudge toward more activity
    Warning,
}

/// Display priority of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InsightPriority {
    High,
    Medium,
}

/// One rendered insight card
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    /// Category
    #[serde(rename = "type")]
    pub kind: InsightKind,
    /// Emoji icon
    pub icon: String,
    /// Card title
    pub title: String,
    /// Card body
    pub message: String,
    /// Display priority
    pub priority: InsightPriority,
}

/// One goal summary row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    /// Goal name
    pub name: String,
    /// Target value
    pub target: f64,
    /// Current value
    pub current: f64,
    /// Unit label
    pub unit: String,
    /// Completion percentage
    pub progress: u32,
}

/// One achievement badge
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    /// Emoji icon
    pub icon: String,
    /// Badge title
    pub title: String,
    /// What unlocks it
    pub description: String,
    /// Whether the user has it
    pub unlocked: bool,
}

/// Seed the progress series from the profile's starting weight
///
/// Four synthetic weekly entries matching the dashboard's initial state.
#[must_use]
pub fn seed_progress(starting_weight: f64) -> Vec<ProgressMetric> {
    let week = |n: u32, weight: f64, calories: u32, workouts: u32| ProgressMetric {
        week: format!("Week {n}"),
        weight,
        calories,
        workouts,
    };

    vec![
        week(1, starting_weight, 8500, 0),
        week(2, starting_weight - 0.5, 9200, 2),
        week(3, starting_weight - 1.2, 9800, 3),
        week(4, starting_weight - 1.8, 10_200, 3),
    ]
}

/// Per-week weight change across the series (kg/week, negative = losing)
#[must_use]
pub fn weight_trend(metrics: &[ProgressMetric]) -> f64 {
    match (metrics.first(), metrics.last()) {
        (Some(first), Some(last)) if metrics.len() > 1 => {
            (last.weight - first.weight) / (metrics.len() - 1) as f64
        }
        _ => 0.0,
    }
}

/// Change in weekly workout count from the first to the last entry
#[must_use]
pub fn workout_trend(metrics: &[ProgressMetric]) -> i64 {
    match (metrics.first(), metrics.last()) {
        (Some(first), Some(last)) if metrics.len() > 1 => {
            i64::from(last.workouts) - i64::from(first.workouts)
        }
        _ => 0,
    }
}

/// Run the fixed insight rules over the series
///
/// `starting_weight` is the profile's onboarding weight; the goal weight is
/// derived from it.
#[must_use]
pub fn analyze(metrics: &[ProgressMetric], starting_weight: f64) -> Vec<Insight> {
    let Some(last) = metrics.last() else {
        return Vec::new();
    };

    let trend = weight_trend(metrics);
    let workouts = workout_trend(metrics);
    let current_weight = last.weight;
    let weight_lost = starting_weight - current_weight;
    let total_workouts: u32 = metrics.iter().map(|m| m.workouts).sum();

    let mut insights = Vec::new();

    if trend < OPTIMAL_LOSS_RATE {
        insights.push(Insight {
            kind: InsightKind::Success,
            icon: "📉".into(),
            title: "Excellent Progress!".into(),
            message: format!(
                "You're losing weight at an optimal rate of {:.1}kg per week. Keep up the consistency!",
                trend.abs()
            ),
            priority: InsightPriority::High,
        });
    } else if trend < 0.0 {
        insights.push(Insight {
            kind: InsightKind::Info,
            icon: "📊".into(),
            title: "Steady Progress".into(),
            message: "Your weight loss is on track. Consider increasing workout intensity for faster results.".into(),
            priority: InsightPriority::Medium,
        });
    }

    if workouts > 0 {
        insights.push(Insight {
            kind: InsightKind::Success,
            icon: "🔥".into(),
            title: "Increasing Activity".into(),
            message: "Great job increasing your workout frequency! This will accelerate your results.".into(),
            priority: InsightPriority::High,
        });
    }

    if total_workouts < LOW_ACTIVITY_THRESHOLD {
        insights.push(Insight {
            kind: InsightKind::Warning,
            icon: "💪".into(),
            title: "Boost Your Activity".into(),
            message: "Aim for at least 3 workouts per week to maximize your fitness goals.".into(),
            priority: InsightPriority::Medium,
        });
    }

    let avg_weekly_loss = weight_lost / metrics.len() as f64;
    if avg_weekly_loss > PROJECTION_MIN_AVG_LOSS {
        let goal_weight = starting_weight - GOAL_WEIGHT_OFFSET_KG;
        let remaining = (current_weight - goal_weight).max(0.0);
        let weeks = (remaining / avg_weekly_loss).ceil() as u32;
        insights.push(Insight {
            kind: InsightKind::Info,
            icon: "⚡".into(),
            title: "AI Recommendation".into(),
            message: format!(
                "Based on your progress, you're on track to reach your goal in {weeks} weeks."
            ),
            priority: InsightPriority::High,
        });
    }

    insights
}

/// Goal summary rows shown on the dashboard
#[must_use]
pub fn goal_summaries(starting_weight: f64) -> Vec<GoalSummary> {
    vec![
        GoalSummary {
            name: "Reach Goal Weight".into(),
            target: starting_weight - GOAL_WEIGHT_OFFSET_KG,
            current: starting_weight,
            unit: "kg".into(),
            progress: 36,
        },
        GoalSummary {
            name: "Complete Workouts".into(),
            target: 40.0,
            current: 11.0,
            unit: "sessions".into(),
            progress: 27,
        },
        GoalSummary {
            name: "Daily Calorie Target".into(),
            target: 2000.0,
            current: 1850.0,
            unit: "kcal".into(),
            progress: 92,
        },
        GoalSummary {
            name: "Hit Protein Target".into(),
            target: 150.0,
            current: 145.0,
            unit: "g".into(),
            progress: 97,
        },
    ]
}

/// Achievement badge catalog; only the first is unlocked at seeding time
#[must_use]
pub fn achievements() -> Vec<Achievement> {
    let badge = |icon: &str, title: &str, description: &str, unlocked: bool| Achievement {
        icon: icon.into(),
        title: title.into(),
        description: description.into(),
        unlocked,
    };

    vec![
        badge("🏋️", "First Workout", "Completed your first training session", true),
        badge("🔥", "On Fire", "7-day workout streak", false),
        badge("⚡", "Cardio Champion", "Completed 20 cardio sessions", false),
        badge("💪", "Strength Master", "PR on all major lifts", false),
        badge("🎯", "Goal Crusher", "Reached your target weight", false),
        badge("🌟", "Consistency King", "30-day consecutive tracking", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_progress_values() {
        let seeded = seed_progress(80.0);
        assert_eq!(seeded.len(), 4);
        assert_eq!(seeded[0].week, "Week 1");
        assert!((seeded[0].weight - 80.0).abs() < f64::EPSILON);
        assert!((seeded[3].weight - 78.2).abs() < 1e-9);
        assert_eq!(seeded[1].calories, 9200);
        assert_eq!(
            seeded.iter().map(|m| m.workouts).collect::<Vec<_>>(),
            vec![0, 2, 3, 3]
        );
    }

    #[test]
    fn test_trends_require_two_entries() {
        let single = seed_progress(70.0)[..1].to_vec();
        assert!((weight_trend(&single) - 0.0).abs() < f64::EPSILON);
        assert_eq!(workout_trend(&single), 0);
    }

    #[test]
    fn test_seeded_series_insights() {
        // Seeded series: trend = -1.8/3 = -0.6 (optimal), workout trend +3,
        // total workouts 8 (no nudge), avg loss 0.45 (no projection)
        let insights = analyze(&seed_progress(80.0), 80.0);
        let titles: Vec<&str> = insights.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Excellent Progress!", "Increasing Activity"]);
        assert!(insights[0].message.contains("0.6kg per week"));
    }

    #[test]
    fn test_steady_progress_rule() {
        let mut metrics = seed_progress(80.0);
        // Flatten the loss so the trend sits between -0.3 and 0
        for (i, m) in metrics.iter_mut().enumerate() {
            m.weight = 80.0 - 0.1 * i as f64;
        }
        let insights = analyze(&metrics, 80.0);
        assert!(insights.iter().any(|i| i.title == "Steady Progress"));
        assert!(!insights.iter().any(|i| i.title == "Excellent Progress!"));
    }

    #[test]
    fn test_low_activity_nudge() {
        let mut metrics = seed_progress(80.0);
        for m in &mut metrics {
            m.workouts = 1;
        }
        let insights = analyze(&metrics, 80.0);
        assert!(insights.iter().any(|i| i.title == "Boost Your Activity"));
    }

    #[test]
    fn test_projection_weeks_non_negative() {
        let mut metrics = seed_progress(80.0);
        // Steep loss: current 76.0, avg loss 1.0 -> 1 week to the 75.0 goal
        if let Some(last) = metrics.last_mut() {
            last.weight = 76.0;
        }
        let insights = analyze(&metrics, 80.0);
        let projection = insights
            .iter()
            .find(|i| i.title == "AI Recommendation")
            .unwrap();
        assert!(projection.message.contains("in 1 weeks"));
    }

    #[test]
    fn test_empty_series_yields_nothing() {
        assert!(analyze(&[], 80.0).is_empty());
    }

    #[test]
    fn test_goal_and_achievement_catalogs() {
        let goals = goal_summaries(80.0);
        assert_eq!(goals.len(), 4);
        assert!((goals[0].target - 75.0).abs() < f64::EPSILON);

        let badges = achievements();
        assert_eq!(badges.len(), 6);
        assert!(badges[0].unlocked);
        assert!(badges[1..].iter().all(|b| !b.unlocked));
    }
}
