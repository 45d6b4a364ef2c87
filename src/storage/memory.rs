//! In-memory preference storage.
//!
//! Used when the preference file cannot be opened, so the session keeps working
//! with its choices held only for the lifetime of the process.

use crate::domain::error::Result;
use crate::storage::backend::PreferenceStore;
use std::collections::BTreeMap;

/// Process-local preference store. Never fails.
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
