// ABOUTME: Configuration module organization for the Forma Coach server
// ABOUTME: Environment-only configuration, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Configuration management
//!
//! All configuration comes from environment variables. Provider credentials
//! are optional by design: their absence puts the gateway into a supported
//! degraded mode, never a startup failure.

/// Environment-based server configuration
pub mod environment;

pub use environment::{
    ElevenLabsConfig, OpenAiConfig, ServerConfig, SessionStoreBackend, SessionStoreConfig,
};
