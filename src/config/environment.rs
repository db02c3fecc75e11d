// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses provider credentials, timeouts, and the session store backend selection
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! Environment-based configuration management
//!
//! Two optional secrets gate the outbound provider calls (`OPENAI_API_KEY`,
//! `ELEVENLABS_API_KEY`). When either is absent the corresponding endpoints
//! serve their canned fallbacks; the server still starts and every feature
//! remains demoable.

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Default HTTP port for the server
const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default timeout for outbound provider calls, in seconds
///
/// The upstream app had no timeout at all; an unresponsive provider would
/// block the request indefinitely. A bounded default closes that gap.
const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 30;

/// Which backend holds the persisted session document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStoreBackend {
    /// In-process memory (lost on restart)
    #[default]
    Memory,
    /// Single JSON file on disk
    File,
}

impl SessionStoreBackend {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "file" => Self::File,
            _ => Self::Memory,
        }
    }
}

impl std::fmt::Display for SessionStoreBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Memory => write!(f, "memory"),
            Self::File => write!(f, "file"),
        }
    }
}

/// Session store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionStoreConfig {
    /// Selected backend
    pub backend: SessionStoreBackend,
    /// File path for the file backend
    pub file_path: PathBuf,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            backend: SessionStoreBackend::Memory,
            file_path: default_session_file_path(),
        }
    }
}

/// Default location of the session document for the file backend
fn default_session_file_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(env::temp_dir)
        .join("forma-coach")
        .join("session.json")
}

/// OpenAI provider configuration (chat completions and image generation)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpenAiConfig {
    /// API key; `None` means the chat, plan, and image endpoints run in
    /// fallback-only mode
    pub api_key: Option<String>,
    /// API base URL (overridable for tests and compatible gateways)
    pub base_url: String,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".into(),
        }
    }
}

/// ElevenLabs provider configuration (text-to-speech)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElevenLabsConfig {
    /// API key; `None` means the speech endpoint reports 503 so clients use
    /// on-device synthesis
    pub api_key: Option<String>,
    /// API base URL
    pub base_url: String,
}

impl Default for ElevenLabsConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.elevenlabs.io/v1".into(),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port to bind
    pub http_port: u16,
    /// Timeout applied to every outbound provider call
    pub provider_timeout_secs: u64,
    /// OpenAI settings
    pub openai: OpenAiConfig,
    /// ElevenLabs settings
    pub elevenlabs: ElevenLabsConfig,
    /// Session store settings
    pub session: SessionStoreConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: DEFAULT_HTTP_PORT,
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
            openai: OpenAiConfig::default(),
            elevenlabs: ElevenLabsConfig::default(),
            session: SessionStoreConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is present but unparseable.
    pub fn from_env() -> AppResult<Self> {
        let http_port = parse_env_var("HTTP_PORT", DEFAULT_HTTP_PORT)?;
        let provider_timeout_secs =
            parse_env_var("PROVIDER_TIMEOUT_SECS", DEFAULT_PROVIDER_TIMEOUT_SECS)?;

        let openai = OpenAiConfig {
            api_key: non_empty_env("OPENAI_API_KEY"),
            base_url: env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| OpenAiConfig::default().base_url),
        };

        let elevenlabs = ElevenLabsConfig {
            api_key: non_empty_env("ELEVENLABS_API_KEY"),
            base_url: env::var("ELEVENLABS_BASE_URL")
                .unwrap_or_else(|_| ElevenLabsConfig::default().base_url),
        };

        let session = SessionStoreConfig {
            backend: env::var("SESSION_STORE")
                .map(|s| SessionStoreBackend::from_str_or_default(&s))
                .unwrap_or_default(),
            file_path: env::var("SESSION_FILE_PATH")
                .map_or_else(|_| default_session_file_path(), PathBuf::from),
        };

        Ok(Self {
            http_port,
            provider_timeout_secs,
            openai,
            elevenlabs,
            session,
        })
    }

    /// One-line summary for startup logging (never includes secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "port={} provider_timeout={}s openai={} elevenlabs={} session_store={}",
            self.http_port,
            self.provider_timeout_secs,
            if self.openai.api_key.is_some() {
                "configured"
            } else {
                "fallback-only"
            },
            if self.elevenlabs.api_key.is_some() {
                "configured"
            } else {
                "unconfigured"
            },
            self.session.backend,
        )
    }
}

/// Read an environment variable, treating the empty string as unset
fn non_empty_env(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Parse a numeric environment variable with a default
fn parse_env_var<T: std::str::FromStr>(name: &str, default: T) -> AppResult<T> {
    match env::var(name) {
        Ok(value) => value
            .parse()
            .map_err(|_| AppError::config(format!("Invalid value for {name}: {value}"))),
        Err(_) => Ok(default),
    }
}
