// ABOUTME: Main library entry point for the Forma Coach fitness planning API
// ABOUTME: Exposes the provider gateway, session persistence, and progress analytics modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

#![deny(unsafe_code)]

//! # Forma Coach Server
//!
//! An AI-backed fitness planning API. The server collects a user profile,
//! generates workout and meal plans, tracks progress metrics, and offers a
//! chat assistant, image generation, and text-to-speech. Each of those is
//! backed by a third-party provider and each is fully functional without one.
//!
//! ## Design
//!
//! Every provider-facing operation follows the same request/fallback
//! protocol: one outbound HTTP call, and a deterministic canned response
//! whenever the provider is unconfigured, errors, or is unreachable. The app
//! must remain fully demoable with zero external configuration, so no
//! provider failure is surfaced to the caller (text-to-speech excepted,
//! where an explicit error lets the client swap to on-device synthesis).
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use forma_coach_server::config::environment::ServerConfig;
//! use forma_coach_server::errors::AppResult;
//!
//! fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("Forma Coach configured for port {}", config.http_port);
//!     Ok(())
//! }
//! ```

/// Configuration management (environment-only)
pub mod config;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Canned fallback payloads and the keyword router for degraded mode
pub mod fallback;

/// Threshold-based progress insights, goals, and achievements
pub mod insights;

/// Logging configuration and structured logging setup
pub mod logging;

/// Core data structures: user profile, persisted session, progress metrics
pub mod models;

/// Daily motivation quote selection
pub mod motivation;

/// Outbound provider clients (OpenAI completions/images, ElevenLabs speech)
pub mod providers;

/// Shared dependency bundle handed to route constructors
pub mod resources;

/// HTTP routes organized by domain
pub mod routes;

/// HTTP server assembly and lifecycle
pub mod server;

/// Session persistence port with memory and file backends
pub mod storage;

/// Voice playback capability with on-device and provider-backed strategies
pub mod voice;
