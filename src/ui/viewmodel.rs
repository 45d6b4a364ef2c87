//! View model types representing renderable UI state.
//!
//! View models are computed from application state by
//! `AppState::compute_viewmodel()` and consumed by the renderer. They contain no
//! business logic, only display-ready data: truncated cells, highlight ranges,
//! modal panel lines and footer hints.
//!
//! # Example
//!
//! ```
//! use userdeck::ui::viewmodel::{FooterInfo, HeaderInfo, UIViewModel, UserRow};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: " Users (1/1) ".to_string(), theme_label: "light".to_string() },
//!     search_bar: None,
//!     rows: vec![UserRow {
//!         id: "1".to_string(),
//!         name: "Ann".to_string(),
//!         email: "a@x.com".to_string(),
//!         role: "Admin".to_string(),
//!         name_highlight: None,
//!         email_highlight: None,
//!     }],
//!     hidden_rows: 0,
//!     empty_state: None,
//!     modal: None,
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//! };
//! assert_eq!(vm.rows.len(), 1);
//! ```

/// Table column widths in characters, gutter included.
pub const ID_COLUMN_WIDTH: usize = 6;
pub const NAME_COLUMN_WIDTH: usize = 26;
pub const EMAIL_COLUMN_WIDTH: usize = 34;

/// Complete UI view model for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UIViewModel {
    pub header: HeaderInfo,

    /// Present while a search query is active.
    pub search_bar: Option<SearchBarInfo>,

    /// Table rows that fit the terminal height, in directory order.
    pub rows: Vec<UserRow>,

    /// Matching rows cut off by the terminal height.
    pub hidden_rows: usize,

    /// Shown instead of the table when no record is visible.
    pub empty_state: Option<EmptyState>,

    /// The open modal, drawn below the table.
    pub modal: Option<ModalPanel>,

    pub footer: FooterInfo,
}

/// One row of the user table.
///
/// Highlights are byte ranges into `name` and `email` marking the search match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    pub name_highlight: Option<(usize, usize)>,
    pub email_highlight: Option<(usize, usize)>,
}

/// Header display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// Title with visible and total counts.
    pub title: String,

    /// Name of the active theme, shown on the right.
    pub theme_label: String,
}

/// Footer display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    /// Command hints for the current modal state.
    pub keybindings: String,
}

/// Empty state message display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
    pub subtitle: String,
}

/// Search bar display information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    pub query: String,
}

/// Contents of the open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalPanel {
    pub title: String,

    /// Label/value pairs, one per line.
    pub fields: Vec<(String, String)>,

    /// Question or instruction under the fields.
    pub prompt: Option<String>,
}
