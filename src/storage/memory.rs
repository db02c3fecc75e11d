// ABOUTME: In-memory session store backend
// ABOUTME: Holds the raw JSON document behind a mutex; default backend and test double
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! In-memory session store
//!
//! Stores the *serialized* document rather than the typed struct, so the
//! parse-failure-means-absent contract is exercised identically to the file
//! backend. Tests use [`MemorySessionStore::with_raw`] to seed corrupted
//! state.

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::SessionStore;
use crate::errors::AppResult;
use crate::models::PersistedSession;

/// Session store backed by process memory
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    document: Mutex<Option<String>>,
}

impl MemorySessionStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw document (possibly invalid JSON)
    #[must_use]
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            document: Mutex::new(Some(raw.into())),
        }
    }
}

#[async_trait]
impl SessionStore for MemorySessionStore {
    async fn load(&self) -> AppResult<Option<PersistedSession>> {
        let guard = self.document.lock().await;
        Ok(guard
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok()))
    }

    async fn save(&self, session: &PersistedSession) -> AppResult<()> {
        let raw = serde_json::to_string(session)?;
        *self.document.lock().await = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        *self.document.lock().await = None;
        Ok(())
    }
}
