//! Path resolution for data, preference and trace files.
//!
//! Data lives in `$XDG_DATA_HOME/userdeck`, falling back to
//! `~/.local/share/userdeck`, and finally to `./.userdeck` when neither variable
//! is set.

use std::path::{Path, PathBuf};

const APP_DIR: &str = "userdeck";
const PREFERENCES_FILE: &str = "preferences.json";
const SPANS_FILE: &str = "userdeck-spans.jsonl";

/// Returns the data directory for this process's environment.
#[must_use]
pub fn get_data_dir() -> PathBuf {
    let xdg = std::env::var("XDG_DATA_HOME").ok();
    let home = std::env::var("HOME").ok();
    data_dir_from(xdg.as_deref(), home.as_deref())
}

/// Resolves the data directory from `XDG_DATA_HOME` and `HOME` values.
///
/// Empty values count as unset.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use userdeck::infrastructure::data_dir_from;
///
/// assert_eq!(data_dir_from(Some("/xdg"), Some("/home/ann")), PathBuf::from("/xdg/userdeck"));
/// assert_eq!(data_dir_from(None, Some("/home/ann")), PathBuf::from("/home/ann/.local/share/userdeck"));
/// ```
#[must_use]
pub fn data_dir_from(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    fn non_empty(value: Option<&str>) -> Option<&str> {
        value.filter(|v| !v.trim().is_empty())
    }

    if let Some(xdg) = non_empty(xdg_data_home) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    if let Some(home) = non_empty(home) {
        return PathBuf::from(home).join(".local").join("share").join(APP_DIR);
    }
    PathBuf::from(format!(".{APP_DIR}"))
}

/// Expands a leading `~` to `home`. Other paths, and `~` without a home, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use userdeck::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("~/exports", Some("/home/ann")), PathBuf::from("/home/ann/exports"));
/// assert_eq!(expand_tilde("/tmp", Some("/home/ann")), PathBuf::from("/tmp"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str, home: Option<&str>) -> PathBuf {
    match (path, home) {
        ("~", Some(home)) => PathBuf::from(home),
        (path, Some(home)) if path.starts_with("~/") => PathBuf::from(home).join(&path[2..]),
        (path, _) => PathBuf::from(path),
    }
}

/// The JSON preference file inside `data_dir`.
#[must_use]
pub fn preferences_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFERENCES_FILE)
}

/// The JSON-lines span file inside `data_dir`.
#[must_use]
pub fn spans_path(data_dir: &Path) -> PathBuf {
    data_dir.join(SPANS_FILE)
}
