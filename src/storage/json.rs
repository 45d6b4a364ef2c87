//! JSON file-based preference storage.
//!
//! Preferences live in a small human-readable JSON file. Writes use the
//! write-to-temp + rename pattern so a crash mid-write never leaves a truncated
//! file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "values": {
//!     "theme": "dark"
//!   }
//! }
//! ```

use crate::domain::error::{DirectoryError, Result};
use crate::storage::backend::PreferenceStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct PreferenceData {
    /// Version of the file format for future migrations.
    version: u32,

    #[serde(default)]
    values: BTreeMap<String, String>,
}

impl Default for PreferenceData {
    fn default() -> Self {
        Self {
            version: 1,
            values: BTreeMap::new(),
        }
    }
}

/// JSON file preference store.
///
/// The whole file is loaded on creation and kept in memory; every `set` writes
/// it back. A write that fails leaves the store dirty and is retried on drop.
pub struct JsonPreferenceStore {
    file_path: PathBuf,
    data: PreferenceData,
    dirty: bool,
}

impl JsonPreferenceStore {
    /// Opens (or prepares to create) the preference file at `file_path`.
    ///
    /// Parent directories are created automatically. A missing file is treated
    /// as an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created, or the file
    /// exists but cannot be read or is not valid JSON.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use userdeck::storage::JsonPreferenceStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonPreferenceStore::new(PathBuf::from("/tmp/userdeck/preferences.json"))?;
    /// # Ok::<(), userdeck::DirectoryError>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON preference store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no preference file yet, starting empty");
            PreferenceData::default()
        };

        tracing::debug!(value_count = data.values.len(), "preference store initialized");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<PreferenceData> {
        let contents = std::fs::read_to_string(path)?;
        let data: PreferenceData = serde_json::from_str(&contents)
            .map_err(|e| DirectoryError::Storage(format!("failed to parse preferences: {e}")))?;

        tracing::debug!(version = data.version, values = data.values.len(), "loaded preferences");
        Ok(data)
    }

    /// Writes the file atomically if anything changed since the last save.
    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DirectoryError::Storage(format!("failed to serialize preferences: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "preferences saved");
        Ok(())
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_preference", key = %key, value = %value).entered();

        self.data.values.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonPreferenceStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty preferences on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save preferences on drop");
            }
        }
    }
}
