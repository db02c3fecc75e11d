// ABOUTME: Session route handlers for the single persisted session document
// ABOUTME: Load, replace, and clear with last-write-wins semantics and swallowed write failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Session persistence routes
//!
//! One session document per deployment, no identity and no versioning.
//! GET returns the stored document or 204 when nothing usable is stored.
//! PUT replaces the whole document and DELETE removes it; both always
//! answer 204, and a failed write is logged and swallowed so a flaky
//! store never interrupts the client's flow.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use std::sync::Arc;
use tracing::warn;

use crate::models::PersistedSession;
use crate::resources::ServerResources;

/// Session routes handler
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create the session routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/api/session",
                get(Self::load_session)
                    .put(Self::save_session)
                    .delete(Self::clear_session),
            )
            .with_state(resources)
    }

    /// Return the stored session, or 204 when absent or unreadable
    async fn load_session(State(resources): State<Arc<ServerResources>>) -> Response {
        match resources.sessions.load().await {
            Ok(Some(session)) => (StatusCode::OK, Json(session)).into_response(),
            Ok(None) => StatusCode::NO_CONTENT.into_response(),
            Err(e) => {
                warn!("Failed to load session, treating as absent: {e}");
                StatusCode::NO_CONTENT.into_response()
            }
        }
    }

    /// Replace the stored session wholesale
    async fn save_session(
        State(resources): State<Arc<ServerResources>>,
        Json(session): Json<PersistedSession>,
    ) -> StatusCode {
        if let Err(e) = resources.sessions.save(&session).await {
            warn!("Failed to save session: {e}");
        }
        StatusCode::NO_CONTENT
    }

    /// Remove the stored session
    async fn clear_session(State(resources): State<Arc<ServerResources>>) -> StatusCode {
        if let Err(e) = resources.sessions.clear().await {
            warn!("Failed to clear session: {e}");
        }
        StatusCode::NO_CONTENT
    }
}
