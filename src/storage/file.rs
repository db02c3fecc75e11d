// ABOUTME: File-backed session store backend
// ABOUTME: One JSON file on disk; missing or unparseable content reads as no session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Forma Coach Contributors

//! File-backed session store
//!
//! The production analogue of per-browser local storage: a single JSON
//! document at a fixed path. Writes create parent directories on demand;
//! reads of missing or corrupted files return "no session".

use async_trait::async_trait;
use std::path::PathBuf;
use tokio::fs;
use tokio::sync::Mutex;
use tracing::debug;

use super::SessionStore;
use crate::errors::AppResult;
use crate::models::PersistedSession;

/// Session store backed by a single JSON file
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    // Serializes writers within this process; cross-process writes are
    // out of scope (single-writer contract).
    write_lock: Mutex<()>,
}

impl FileSessionStore {
    /// Create a store at the given path (the file need not exist yet)
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            write_lock: Mutex::new(()),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

#[async_trait]
impl SessionStore for FileSessionStore {
    async fn load(&self) -> AppResult<Option<PersistedSession>> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let parsed = serde_json::from_str(&raw).ok();
                if parsed.is_none() {
                    debug!(path = %self.path.display(), "Stored session failed to parse; treating as absent");
                }
                Ok(parsed)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, session: &PersistedSession) -> AppResult<()> {
        let raw = serde_json::to_string(session)?;
        let _guard = self.write_lock.lock().await;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, raw).await?;
        Ok(())
    }

    async fn clear(&self) -> AppResult<()> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
