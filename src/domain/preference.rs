//! Display theme preference.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The user's light/dark display choice, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    #[default]
    Light,
    Dark,
}

impl ThemeChoice {
    /// Returns the stored value (`light` or `dark`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parses a stored value. Anything other than `light` or `dark` is rejected.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// Returns the opposite choice.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_values_parse() {
        assert_eq!(ThemeChoice::from_value("dark"), Some(ThemeChoice::Dark));
        assert_eq!(ThemeChoice::from_value("light"), Some(ThemeChoice::Light));
        assert_eq!(ThemeChoice::from_value("Dark"), None);
        assert_eq!(ThemeChoice::from_value(""), None);
    }

    #[test]
    fn toggle_flips() {
        assert_eq!(ThemeChoice::Light.toggled(), ThemeChoice::Dark);
        assert_eq!(ThemeChoice::Dark.toggled().toggled(), ThemeChoice::Dark);
    }
}
