// ABOUTME: Progress route handlers for threshold-based insights and the daily quote
// ABOUTME: Pure computation over tracked metrics, no provider involvement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Progress and motivation routes
//!
//! The insights endpoint runs the fixed rule set in [`crate::insights`]
//! over the caller's tracked metrics (or the seeded four weeks when none
//! are supplied) and returns insights, goal summaries, and the badge
//! ladder in one payload. The quote endpoint rotates through a fixed pool
//! by day of year, so every caller sees the same quote on the same day.

use axum::{
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::insights::{self, Achievement, GoalSummary, Insight};
use crate::models::ProgressMetric;
use crate::motivation;

/// Request body for the insights endpoint
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsRequest {
    /// Weight at the start of the program, in kilograms
    pub starting_weight: f64,
    /// Tracked weekly metrics; seeded history is used when omitted
    #[serde(default)]
    pub metrics: Option<Vec<ProgressMetric>>,
}

/// Response body for the insights endpoint
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    /// Metrics the analysis ran over
    pub metrics: Vec<ProgressMetric>,
    /// Triggered insights, high priority first
    pub insights: Vec<Insight>,
    /// Goal progress summaries
    pub goals: Vec<GoalSummary>,
    /// Full badge ladder with unlock state
    pub achievements: Vec<Achievement>,
}

/// Response body for the quote endpoint
#[derive(Debug, Serialize)]
pub struct QuoteResponse {
    /// Today's motivational quote
    pub quote: &'static str,
}

/// Progress routes handler
pub struct ProgressRoutes;

impl ProgressRoutes {
    /// Create the progress and motivation routes
    ///
    /// Pure computation; unlike the gateway routes, nothing here needs
    /// shared resources.
    pub fn routes() -> Router {
        Router::new()
            .route("/api/progress/insights", post(Self::insights))
            .route("/api/motivation/quote", get(Self::quote))
    }

    /// Analyze tracked metrics against the fixed rule set
    async fn insights(Json(request): Json<InsightsRequest>) -> Json<InsightsResponse> {
        let metrics = request
            .metrics
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| insights::seed_progress(request.starting_weight));

        let analysis = insights::analyze(&metrics, request.starting_weight);
        let goals = insights::goal_summaries(request.starting_weight);

        Json(InsightsResponse {
            metrics,
            insights: analysis,
            goals,
            achievements: insights::achievements(),
        })
    }

    /// Return today's quote from the rotation
    async fn quote() -> Json<QuoteResponse> {
        Json(QuoteResponse {
            quote: motivation::daily_quote(),
        })
    }
}
