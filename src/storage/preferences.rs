//! Theme preference persistence.
//!
//! Reading and writing the theme never fails from the caller's point of view:
//! an unreadable store, a missing key or an unrecognised value all restore the
//! default `light` theme, and a failed write is logged and otherwise ignored.

use crate::domain::ThemeChoice;
use crate::storage::backend::PreferenceStore;

/// The single key the directory persists.
pub const THEME_KEY: &str = "theme";

/// Restores the persisted theme, falling back to [`ThemeChoice::Light`].
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> ThemeChoice {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => ThemeChoice::from_value(&value).unwrap_or_else(|| {
            tracing::warn!(value = %value, "unrecognised stored theme, using default");
            ThemeChoice::default()
        }),
        Ok(None) => {
            tracing::debug!("no stored theme, using default");
            ThemeChoice::default()
        }
        Err(e) => {
            tracing::warn!(error = %e, "preference store unavailable, using default theme");
            ThemeChoice::default()
        }
    }
}

/// Persists `choice`. Returns whether the write succeeded.
pub fn save_theme<S: PreferenceStore + ?Sized>(store: &mut S, choice: ThemeChoice) -> bool {
    match store.set(THEME_KEY, choice.as_str()) {
        Ok(()) => {
            tracing::debug!(theme = %choice, "theme preference saved");
            true
        }
        Err(e) => {
            tracing::warn!(error = %e, theme = %choice, "failed to persist theme preference");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{DirectoryError, Result};
    use crate::storage::MemoryPreferenceStore;

    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Err(DirectoryError::Storage("disk on fire".to_string()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(DirectoryError::Storage("disk on fire".to_string()))
        }
    }

    #[test]
    fn defaults_to_light_when_absent() {
        assert_eq!(load_theme(&MemoryPreferenceStore::default()), ThemeChoice::Light);
    }

    #[test]
    fn round_trips_dark() {
        let mut store = MemoryPreferenceStore::default();
        assert!(save_theme(&mut store, ThemeChoice::Dark));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
        assert_eq!(load_theme(&store), ThemeChoice::Dark);
    }

    #[test]
    fn garbage_value_falls_back_to_light() {
        let mut store = MemoryPreferenceStore::default();
        store.set(THEME_KEY, "solarized").unwrap();
        assert_eq!(load_theme(&store), ThemeChoice::Light);
    }

    #[test]
    fn unavailable_store_never_fails_the_caller() {
        let mut store = UnavailableStore;
        assert_eq!(load_theme(&store), ThemeChoice::Light);
        assert!(!save_theme(&mut store, ThemeChoice::Dark));
    }
}
