// ABOUTME: HTTP server assembly merging all route families behind shared middleware
// ABOUTME: Owns the listener lifecycle; the router is exposed separately for in-process tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # Server assembly
//!
//! Merges the per-family routers into one application router, applies the
//! shared middleware stack (request tracing, permissive CORS for the
//! browser client, a request timeout), and runs it on a Tokio TCP
//! listener. Tests call [`build_router`] directly and drive it with
//! `tower::ServiceExt::oneshot`, skipping the listener entirely.

use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;

use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use crate::routes::{
    ChatRoutes, HealthRoutes, ImageRoutes, PlanRoutes, ProgressRoutes, SessionRoutes, SpeechRoutes,
};

/// Slack added on top of the provider call timeout before the HTTP layer
/// gives up on a request
const REQUEST_TIMEOUT_SLACK_SECS: u64 = 5;

/// Build the full application router
///
/// Every route family plus shared middleware; no listener. This is the
/// seam the integration tests use.
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_timeout =
        Duration::from_secs(resources.config.provider_timeout_secs + REQUEST_TIMEOUT_SLACK_SECS);

    Router::new()
        .merge(ChatRoutes::routes(resources.clone()))
        .merge(PlanRoutes::routes(resources.clone()))
        .merge(ImageRoutes::routes(resources.clone()))
        .merge(SpeechRoutes::routes(resources.clone()))
        .merge(SessionRoutes::routes(resources))
        .merge(ProgressRoutes::routes())
        .merge(HealthRoutes::routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::new(request_timeout))
}

/// The coaching gateway server
pub struct CoachServer {
    resources: Arc<ServerResources>,
}

impl CoachServer {
    /// Create a server around shared resources
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Bind the configured port and serve until the process is stopped
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server loop
    /// fails.
    pub async fn run(self) -> AppResult<()> {
        let port = self.resources.config.http_port;
        let app = build_router(self.resources);

        let listener = TcpListener::bind(("0.0.0.0", port))
            .await
            .map_err(|e| AppError::internal(format!("Failed to bind port {port}: {e}")))?;

        info!("Coaching gateway listening on http://0.0.0.0:{port}");

        axum::serve(listener, app)
            .await
            .map_err(|e| AppError::internal(format!("Server error: {e}")))
    }
}
