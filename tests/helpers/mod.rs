// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the axum oneshot driver and router construction shortcuts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;

use axum::Router;
use forma_coach_server::config::environment::ServerConfig;
use forma_coach_server::resources::ServerResources;
use forma_coach_server::server::build_router;
use forma_coach_server::storage::SharedSessionStore;
use std::sync::Arc;

/// Build the full application router with default (fallback-only)
/// configuration and a fresh in-memory session store
#[allow(dead_code)]
pub fn test_router() -> Router {
    let resources =
        ServerResources::from_config(ServerConfig::default()).expect("Failed to build resources");
    build_router(Arc::new(resources))
}

/// Build the full application router around an explicit session store
#[allow(dead_code)]
pub fn test_router_with_store(sessions: SharedSessionStore) -> Router {
    let resources = ServerResources::with_session_store(ServerConfig::default(), sessions)
        .expect("Failed to build resources");
    build_router(Arc::new(resources))
}

/// Build the full application router from an explicit configuration
#[allow(dead_code)]
pub fn test_router_with_config(config: ServerConfig) -> Router {
    let resources = ServerResources::from_config(config).expect("Failed to build resources");
    build_router(Arc::new(resources))
}

/// Serve a stub provider router on an ephemeral local port and return its
/// base URL
#[allow(dead_code)]
pub async fn spawn_stub_provider(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub provider");
    let addr = listener.local_addr().expect("Failed to read stub address");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    format!("http://{addr}")
}
