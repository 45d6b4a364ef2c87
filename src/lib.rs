//! Userdeck: an in-memory user directory with search, CSV export and a
//! persisted light/dark theme.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Console front-end (main.rs)                        │  ← Commands in, frames out
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← View orchestrator
//! │  - Event handling and modal state machine           │
//! │  - Form validation                                  │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Directory     │   │ Storage Layer │
//! │ (ui/)         │   │ (directory/)  │   │ (storage/)    │
//! │ - Rendering   │   │ - Store       │   │ - Preferences │
//! │ - Theming     │   │ - Id alloc    │   │ - Seed JSON   │
//! │ - Components  │   │ - Filter, CSV │   │               │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain (domain/) and Infrastructure (infra/)       │
//! │  - User, Role, ThemeChoice, errors                  │
//! │  - Data directory resolution                        │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing + OpenTelemetry, JSON-lines span file    │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: state, events, actions and validation
//! - [`directory`]: the canonical collection, id allocation, filtering, CSV
//! - [`domain`]: core types and errors
//! - [`infrastructure`]: environment and path resolution
//! - [`storage`]: preference persistence and seed loading
//! - [`ui`]: terminal rendering with theme support
//! - [`observability`]: tracing setup
//!
//! # Configuration
//!
//! The binary takes `key=value` arguments:
//!
//! ```text
//! userdeck seed_file=~/users.json export_dir=~/Downloads trace_level=debug
//! ```
//!
//! # Example
//!
//! ```
//! use userdeck::storage::MemoryPreferenceStore;
//! use userdeck::{handle_event, initialize, Action, Config, Event};
//!
//! let mut state = initialize(&Config::default(), &MemoryPreferenceStore::default())?;
//! let (_, actions) = handle_event(&mut state, &Event::ExportCsv)?;
//! assert!(matches!(&actions[0], Action::Download { filename, .. } if filename == "users.csv"));
//! # Ok::<(), userdeck::DirectoryError>(())
//! ```

pub mod app;
pub mod directory;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, Notification, NotificationKind};
pub use domain::{DirectoryError, Result, Role, ThemeChoice, User};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::PathBuf;
use storage::{JsonPreferenceStore, MemoryPreferenceStore, PreferenceStore};

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// JSON seed file. `None` uses the built-in seed.
    pub seed_file: Option<PathBuf>,

    /// Where preferences and span files live.
    pub data_dir: PathBuf,

    /// Where `users.csv` is written.
    pub export_dir: PathBuf,

    /// Tracing filter, e.g. `debug` or `userdeck=trace`. Default: `info`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: None,
            data_dir: infrastructure::get_data_dir(),
            export_dir: PathBuf::from("."),
            trace_level: None,
        }
    }
}

impl Config {
    /// Keys accepted by [`Config::from_map`].
    pub const KEYS: [&'static str; 4] = ["seed_file", "data_dir", "export_dir", "trace_level"];

    /// Parses configuration from a key-value map. Missing or blank values keep
    /// their defaults; a leading `~` in paths expands to `$HOME`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] for keys other than [`Config::KEYS`].
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use std::path::PathBuf;
    /// use userdeck::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("export_dir".to_string(), "/tmp/out".to_string());
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.export_dir, PathBuf::from("/tmp/out"));
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// # Ok::<(), userdeck::DirectoryError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        if let Some(unknown) = map.keys().find(|key| !Self::KEYS.contains(&key.as_str())) {
            return Err(DirectoryError::Config(format!(
                "unknown key \"{unknown}\"; expected one of {}",
                Self::KEYS.join(", ")
            )));
        }

        let home = std::env::var("HOME").ok();
        let value = |key: &str| map.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());
        let path = |key: &str| value(key).map(|v| infrastructure::expand_tilde(v, home.as_deref()));

        let defaults = Self::default();
        Ok(Self {
            seed_file: path("seed_file"),
            data_dir: path("data_dir").unwrap_or(defaults.data_dir),
            export_dir: path("export_dir").unwrap_or(defaults.export_dir),
            trace_level: value("trace_level").map(str::to_string),
        })
    }

    /// Parses `key=value` arguments into a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] for an argument without `=` or an
    /// unknown key.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = BTreeMap::new();
        for arg in args {
            let arg = arg.as_ref();
            let Some((key, value)) = arg.split_once('=') else {
                return Err(DirectoryError::Config(format!(
                    "expected key=value, got \"{arg}\""
                )));
            };
            map.insert(key.trim().to_string(), value.to_string());
        }
        Self::from_map(&map)
    }
}

/// Opens the JSON preference file in the data directory, falling back to an
/// in-memory store when it cannot be opened.
#[must_use]
pub fn open_preferences(config: &Config) -> Box<dyn PreferenceStore> {
    let path = infrastructure::preferences_path(&config.data_dir);
    match JsonPreferenceStore::new(path) {
        Ok(store) => Box::new(store),
        Err(e) => {
            tracing::warn!(error = %e, "preference file unavailable, preferences will not persist");
            Box::new(MemoryPreferenceStore::default())
        }
    }
}

/// Builds the initial state: the seed directory, the persisted theme and no
/// modal or query.
///
/// # Errors
///
/// Returns an error if the seed cannot be read or is invalid, or if the theme
/// palette cannot be loaded. Preference failures never fail initialization.
pub fn initialize<S: PreferenceStore + ?Sized>(config: &Config, preferences: &S) -> Result<AppState> {
    let _span = tracing::debug_span!("initialize", seed_file = ?config.seed_file).entered();

    let directory = storage::load_directory(config.seed_file.as_deref())?;
    let theme = storage::load_theme(preferences);
    tracing::debug!(user_count = directory.len(), theme = %theme, "state initialized");

    AppState::new(directory, theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        assert_eq!(Config::from_map(&BTreeMap::new()).unwrap(), Config::default());
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = Config::from_map(&map(&[("export_dir", "  "), ("trace_level", "")])).unwrap();
        assert_eq!(config.export_dir, PathBuf::from("."));
        assert_eq!(config.trace_level, None);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = Config::from_map(&map(&[("theme", "dark")]));
        assert!(matches!(result, Err(DirectoryError::Config(_))));
    }

    #[test]
    fn args_are_split_on_first_equals() {
        let config = Config::from_args(["seed_file=/srv/a=b.json", "data_dir=/var/lib/ud"]).unwrap();
        assert_eq!(config.seed_file, Some(PathBuf::from("/srv/a=b.json")));
        assert_eq!(config.data_dir, PathBuf::from("/var/lib/ud"));

        assert!(matches!(
            Config::from_args(["verbose"]),
            Err(DirectoryError::Config(_))
        ));
    }

    #[test]
    fn initialize_restores_theme() {
        let mut preferences = MemoryPreferenceStore::default();
        storage::save_theme(&mut preferences, ThemeChoice::Dark);

        let state = initialize(&Config::default(), &preferences).unwrap();
        assert_eq!(state.theme_choice, ThemeChoice::Dark);
        assert!(!state.directory.is_empty());
        assert!(!state.modal.is_open());
    }

    #[test]
    fn preferences_fall_back_to_memory() {
        let dir = tempfile::TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "not a directory").unwrap();

        let config = Config {
            data_dir: blocker.join("nested"),
            ..Config::default()
        };
        let mut store = open_preferences(&config);
        assert!(store.set("theme", "dark").is_ok());
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }
}
