// ABOUTME: Shared dependency bundle constructed once at startup
// ABOUTME: Carries config, optional provider clients, and the session store into routes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Server resources
//!
//! One bundle built at startup and shared (via `Arc`) with every route
//! module. Provider fields are `Option`: absence of a credential is a
//! supported degraded mode, so construction never fails for missing keys.

use std::time::Duration;

use crate::config::environment::ServerConfig;
use crate::errors::AppResult;
use crate::providers::{ElevenLabsProvider, OpenAiProvider};
use crate::storage::{self, SharedSessionStore};

/// Dependencies shared by all route handlers
pub struct ServerResources {
    /// Loaded configuration
    pub config: ServerConfig,
    /// OpenAI client, when `OPENAI_API_KEY` is configured
    pub openai: Option<OpenAiProvider>,
    /// ElevenLabs client, when `ELEVENLABS_API_KEY` is configured
    pub elevenlabs: Option<ElevenLabsProvider>,
    /// Session document store
    pub sessions: SharedSessionStore,
}

impl ServerResources {
    /// Build resources from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed; missing
    /// credentials are not an error.
    pub fn from_config(config: ServerConfig) -> AppResult<Self> {
        let timeout = Duration::from_secs(config.provider_timeout_secs);
        let openai = OpenAiProvider::from_config(&config.openai, timeout)?;
        let elevenlabs = ElevenLabsProvider::from_config(&config.elevenlabs, timeout)?;
        let sessions = storage::from_config(&config.session);

        Ok(Self {
            config,
            openai,
            elevenlabs,
            sessions,
        })
    }

    /// Build resources with an explicit session store (used by tests)
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn with_session_store(
        config: ServerConfig,
        sessions: SharedSessionStore,
    ) -> AppResult<Self> {
        let mut resources = Self::from_config(config)?;
        resources.sessions = sessions;
        Ok(resources)
    }
}
