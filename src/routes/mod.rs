// ABOUTME: HTTP route modules for the coaching gateway API
// ABOUTME: Each module owns one endpoint family and exposes a XxxRoutes::routes() constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! HTTP routes
//!
//! Each endpoint family lives in its own module and exposes a unit struct
//! with a `routes()` constructor returning an `axum::Router`. The server
//! merges these routers in [`crate::server`].

pub mod chat;
pub mod health;
pub mod image;
pub mod plan;
pub mod progress;
pub mod session;
pub mod speech;

pub use chat::ChatRoutes;
pub use health::HealthRoutes;
pub use image::ImageRoutes;
pub use plan::PlanRoutes;
pub use progress::ProgressRoutes;
pub use session::SessionRoutes;
pub use speech::SpeechRoutes;
