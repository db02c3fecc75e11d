// ABOUTME: Health check route handlers for service monitoring
// ABOUTME: Provides health and readiness endpoints for load balancers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Health check routes
//!
//! Liveness and readiness endpoints for monitoring and load balancer
//! health checks. The gateway has no hard dependencies at startup, so
//! readiness is equivalent to liveness.

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// Health routes implementation
pub struct HealthRoutes;

impl HealthRoutes {
    /// Create all health check routes
    pub fn routes() -> Router {
        Router::new()
            .route("/health", get(|| async { status_payload("healthy") }))
            .route("/ready", get(|| async { status_payload("ready") }))
    }
}

fn status_payload(status: &str) -> Json<Value> {
    Json(json!({
        "status": status,
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
