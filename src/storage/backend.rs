//! Preference storage abstraction.
//!
//! This module defines the [`PreferenceStore`] trait, a minimal key-value
//! interface over whatever persists user preferences between sessions. The
//! directory stores a single key, the theme.

use crate::domain::error::Result;

/// Key-value persistence for user preferences.
///
/// # Implementations
///
/// - [`JsonPreferenceStore`](crate::storage::JsonPreferenceStore): JSON file with atomic writes
/// - [`MemoryPreferenceStore`](crate::storage::MemoryPreferenceStore): process-local map
///
/// # Examples
///
/// ```
/// use userdeck::storage::{MemoryPreferenceStore, PreferenceStore};
///
/// let mut store = MemoryPreferenceStore::default();
/// store.set("theme", "dark")?;
/// assert_eq!(store.get("theme")?.as_deref(), Some("dark"));
/// # Ok::<(), userdeck::DirectoryError>(())
/// ```
pub trait PreferenceStore {
    /// Reads the value stored under `key`, `Ok(None)` if it was never set.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
