//! JSON file-based preference store.
//!
//! This module provides a simple, human-readable storage implementation using
//! JSON serialization, playing the role the browser's `localStorage` played for
//! the original dashboard. It uses atomic file writes (write-to-temp + rename)
//! to prevent corruption on crashes.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - loads entire file into memory once
//! - **Write**: O(n) - serializes and writes the whole map
//! - **Best for**: a handful of UI preferences, infrequent writes

use crate::domain::error::{Result, SidebarError};
use crate::storage::backend::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// On-disk preference container format.
///
/// Wraps the key-value map in a versioned object so the format can evolve
/// without breaking older files.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the storage format for future migrations.
    version: u32,

    /// All stored preferences, keyed by preference name.
    #[serde(default)]
    values: HashMap<String, String>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            values: HashMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// Keeps the full map in memory and persists on modification. The file is
/// written atomically via a temporary sibling, so a crash mid-write never
/// leaves a corrupt file behind.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "values": {
///     "sidebarCollapsed": "true"
///   }
/// }
/// ```
pub struct JsonPreferences {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory data cache, loaded on creation.
    data: PreferenceData,

    /// Tracks if data has been modified since last save.
    dirty: bool,
}

impl JsonPreferences {
    /// Creates or opens a JSON preference store.
    ///
    /// If the file exists, loads existing data. Otherwise starts empty. Parent
    /// directories are created automatically.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - File exists but contains invalid JSON
    /// - File permissions prevent reading
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            PreferenceData::default()
        };

        tracing::debug!(count = data.values.len(), "preference store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Loads preference data from a JSON file.
    fn load_from_file(path: &PathBuf) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| SidebarError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            count = data.values.len(),
            "loaded preference data"
        );

        Ok(data)
    }

    /// Saves preference data to disk using an atomic write.
    ///
    /// Writes to a temporary file first, then renames it over the target path,
    /// so the file is never left in a corrupt state even if the process crashes.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| SidebarError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferences {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let value = self.data.values.get(key).cloned();
        tracing::trace!(key, found = value.is_some(), "preference lookup");
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key, value).entered();

        self.data.values.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonPreferences {
    /// Ensures data is saved on drop if a write was left pending.
    fn drop(&mut self) {
        if self.dirty {
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}
