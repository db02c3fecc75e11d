// ABOUTME: Session persistence port with pluggable backends
// ABOUTME: One JSON document, last-write-wins, parse failures treated as absent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! # Session store
//!
//! The app persists exactly one JSON document: the [`PersistedSession`].
//! The contract is deliberately forgiving:
//!
//! - `load` returns `None` for a missing document *and* for one that no
//!   longer parses: stale shapes are treated as absent, never migrated.
//! - `save` and `clear` may fail; callers log and swallow, the user never
//!   sees a persistence error.
//!
//! No locking beyond each backend's own mutex: the document is
//! single-writer by construction.

/// File-backed store (single JSON file)
pub mod file;
/// In-memory store (default backend, also the test double)
pub mod memory;

use crate::config::{SessionStoreBackend, SessionStoreConfig};
use crate::errors::AppResult;
use crate::models::PersistedSession;
use async_trait::async_trait;
use std::sync::Arc;

pub use file::FileSessionStore;
pub use memory::MemorySessionStore;

/// Persistence port for the single session document
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Read the session document
    ///
    /// Returns `Ok(None)` when nothing is stored or the stored bytes fail
    /// to parse; "no session" is a state, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error only for backend I/O faults other than absence.
    async fn load(&self) -> AppResult<Option<PersistedSession>>;

    /// Serialize and write the session document (last-write-wins)
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the backend write fails.
    async fn save(&self, session: &PersistedSession) -> AppResult<()>;

    /// Remove the session document
    ///
    /// # Errors
    ///
    /// Returns an error if the backend removal fails. Removing an absent
    /// document is not an error.
    async fn clear(&self) -> AppResult<()>;
}

/// Shared handle to a session store
pub type SharedSessionStore = Arc<dyn SessionStore>;

/// Build the configured store backend
#[must_use]
pub fn from_config(config: &SessionStoreConfig) -> SharedSessionStore {
    match config.backend {
        SessionStoreBackend::Memory => Arc::new(MemorySessionStore::new()),
        SessionStoreBackend::File => Arc::new(FileSessionStore::new(config.file_path.clone())),
    }
}
