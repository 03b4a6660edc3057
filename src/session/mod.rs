//! Session-scoped filter persistence.
//!
//! Screens with session persistence (job requests, referrals, users) keep
//! their filter state when the user moves to a detail view and back. The
//! state lives in a session directory: one JSON file per entity filter set,
//! plus a `tabs.json` reference-count registry holding one timestamp per
//! open client. The last client to deregister clears the persisted filter
//! state, so a fresh session starts clean.
//!
//! The context is explicitly opened and closed; nothing registers itself
//! behind the caller's back.

use std::fs;
use std::path::{Path, PathBuf};

use jiff::Timestamp;
use parking_lot::Mutex;

use crate::config::Config;
use crate::controller::ActiveFilterSet;
use crate::error::{HiretrackError, Result};
use crate::types::EntityKind;

const TAB_REGISTRY_FILE: &str = "tabs.json";

/// Handle for one client's membership in the session.
pub struct SessionContext {
    root: PathBuf,
    /// Our entry in the tab registry, removed again on close.
    stamp: i64,
    /// Guards registry read-modify-write within this process.
    registry_lock: Mutex<()>,
}

/// Session directory, honoring `HIRETRACK_STATE_DIR`.
pub fn default_session_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("HIRETRACK_STATE_DIR") {
        return PathBuf::from(dir);
    }
    Config::config_dir().join("session")
}

fn read_registry(path: &Path) -> Result<Vec<i64>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    let stamps: Vec<i64> = serde_json::from_str(&content)?;
    Ok(stamps)
}

fn write_registry(path: &Path, stamps: &[i64]) -> Result<()> {
    fs::write(path, serde_json::to_string(stamps)?)?;
    Ok(())
}

impl SessionContext {
    /// Open the default session, registering this client in the tab
    /// registry.
    pub fn open() -> Result<Self> {
        Self::open_at(default_session_dir())
    }

    /// Open a session rooted at a specific directory.
    pub fn open_at(root: PathBuf) -> Result<Self> {
        fs::create_dir_all(&root)?;
        let stamp = Timestamp::now().as_nanosecond() as i64;

        let registry_path = root.join(TAB_REGISTRY_FILE);
        let mut stamps = read_registry(&registry_path)?;
        stamps.push(stamp);
        write_registry(&registry_path, &stamps)?;
        tracing::debug!(tabs = stamps.len(), "registered session client");

        Ok(Self {
            root,
            stamp,
            registry_lock: Mutex::new(()),
        })
    }

    fn filters_path(&self, entity: EntityKind) -> PathBuf {
        self.root.join(format!("filters-{}.json", entity))
    }

    fn registry_path(&self) -> PathBuf {
        self.root.join(TAB_REGISTRY_FILE)
    }

    /// Number of registered clients.
    pub fn tab_count(&self) -> Result<usize> {
        let _guard = self.registry_lock.lock();
        Ok(read_registry(&self.registry_path())?.len())
    }

    /// Persist a filter set for an entity.
    pub fn store_filters(&self, entity: EntityKind, filters: &ActiveFilterSet) -> Result<()> {
        let json = serde_json::to_string(filters)?;
        fs::write(self.filters_path(entity), json)?;
        Ok(())
    }

    /// Load the persisted filter set for an entity, if any.
    pub fn load_filters(&self, entity: EntityKind) -> Result<Option<ActiveFilterSet>> {
        let path = self.filters_path(entity);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(filters) => Ok(Some(filters)),
            Err(e) => {
                // A corrupt filter file is dropped rather than wedging the
                // screen.
                tracing::warn!(entity = %entity, error = %e, "discarding unreadable filter state");
                let _ = fs::remove_file(&path);
                Ok(None)
            }
        }
    }

    /// Remove the persisted filter set for an entity.
    pub fn clear_filters(&self, entity: EntityKind) -> Result<()> {
        let path = self.filters_path(entity);
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }

    fn clear_all_filters(&self) -> Result<()> {
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let name = entry.file_name();
            let name = name.to_string_lossy();
            if name.starts_with("filters-") && name.ends_with(".json") {
                fs::remove_file(entry.path())?;
            }
        }
        Ok(())
    }

    /// Deregister this client. The last one out clears all persisted filter
    /// state.
    pub fn close(self) -> Result<()> {
        let _guard = self.registry_lock.lock();
        let registry_path = self.registry_path();
        let mut stamps = read_registry(&registry_path)?;
        if let Some(index) = stamps.iter().position(|&s| s == self.stamp) {
            stamps.remove(index);
        } else {
            return Err(HiretrackError::Session(
                "session registry lost this client's registration".to_string(),
            ));
        }
        write_registry(&registry_path, &stamps)?;

        if stamps.is_empty() {
            tracing::debug!("last session client closed; clearing filter state");
            self.clear_all_filters()?;
        }
        Ok(())
    }
}
