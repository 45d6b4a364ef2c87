//! Color palettes and ANSI escape sequence generation.
//!
//! There are two palettes, one per [`ThemeChoice`], bundled into the binary as
//! TOML and parsed on demand.
//!
//! # TOML Format
//!
//! ```toml
//! name = "light"
//!
//! [colors]
//! header_fg = "#1d4ed8"
//! header_bg = "#eff6ff"          # optional
//! text_normal = "#111827"
//! text_dim = "#6b7280"
//! border = "#bfdbfe"
//! search_bar_border = "#0891b2"
//! match_highlight_fg = "#111827"
//! match_highlight_bg = "#fde68a"
//! empty_state_fg = "#2563eb"
//! modal_border = "#0891b2"
//! success_fg = "#15803d"
//! error_fg = "#dc2626"
//! ```

use crate::domain::error::{DirectoryError, Result};
use crate::domain::ThemeChoice;
use serde::{Deserialize, Serialize};

const LIGHT_PALETTE: &str = include_str!("../../themes/light.toml");
const DARK_PALETTE: &str = include_str!("../../themes/dark.toml");

/// Color scheme configuration for UI rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

/// Hex colors (`"#rrggbb"`) for every UI element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    pub header_fg: String,
    #[serde(default)]
    pub header_bg: Option<String>,

    pub text_normal: String,
    /// Footer and secondary text.
    pub text_dim: String,

    pub border: String,

    pub search_bar_border: String,
    pub match_highlight_fg: String,
    pub match_highlight_bg: String,

    pub empty_state_fg: String,

    pub modal_border: String,

    /// Notification colors.
    pub success_fg: String,
    pub error_fg: String,
}

impl Theme {
    /// Loads the bundled palette for `choice`.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Theme`] if the bundled TOML does not parse.
    pub fn for_choice(choice: ThemeChoice) -> Result<Self> {
        let toml_str = match choice {
            ThemeChoice::Light => LIGHT_PALETTE,
            ThemeChoice::Dark => DARK_PALETTE,
        };

        Self::from_toml(toml_str)
    }

    /// Parses a palette from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Theme`] on invalid syntax or missing colors.
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str)
            .map_err(|e| DirectoryError::Theme(format!("failed to parse palette TOML: {e}")))
    }

    /// Parses `#rrggbb`, falling back to white on malformed input.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim().trim_start_matches('#');

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).unwrap_or(255);
        (channel(0..2), channel(2..4), channel(4..6))
    }

    /// 24-bit foreground escape for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// 24-bit background escape for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling.
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}
