//! Application state and view model computation.
//!
//! [`AppState`] is the single source of truth for everything transient: the
//! directory, the open modal, the search query and the active theme. The
//! filtered view is never stored; [`AppState::visible_users`] recomputes it from
//! the canonical collection and the current query on every read.
//!
//! # Example
//!
//! ```
//! use userdeck::app::AppState;
//! use userdeck::domain::ThemeChoice;
//! use userdeck::storage::load_directory;
//!
//! let mut state = AppState::new(load_directory(None)?, ThemeChoice::Light)?;
//! state.search_query = "example".to_string();
//! let viewmodel = state.compute_viewmodel(24, 100);
//! assert!(viewmodel.header.title.contains("User Management Panel"));
//! # Ok::<(), userdeck::DirectoryError>(())
//! ```

use super::modes::{FormField, Modal};
use crate::directory::{filter_users, match_range, DirectoryStore};
use crate::domain::error::Result;
use crate::domain::{ThemeChoice, User};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, FooterInfo, HeaderInfo, ModalPanel, SearchBarInfo, UIViewModel, UserRow,
    EMAIL_COLUMN_WIDTH, ID_COLUMN_WIDTH, NAME_COLUMN_WIDTH,
};

/// Space between a cell and the next column.
const GUTTER: usize = 2;

/// Blank line, header, two borders, column headers and footer.
const BASE_CHROME_ROWS: usize = 6;
const SEARCH_BAR_ROWS: usize = 3;

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The canonical user collection.
    pub directory: DirectoryStore,

    /// The open modal with its subject and form draft.
    pub modal: Modal,

    /// Free-text filter. Empty shows everything.
    pub search_query: String,

    pub theme_choice: ThemeChoice,

    /// Palette for `theme_choice`.
    pub theme: Theme,
}

impl AppState {
    /// Creates state with no modal open and an empty query.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Theme`](crate::DirectoryError::Theme) if the
    /// palette for `theme_choice` cannot be loaded.
    pub fn new(directory: DirectoryStore, theme_choice: ThemeChoice) -> Result<Self> {
        Ok(Self {
            directory,
            modal: Modal::None,
            search_query: String::new(),
            theme_choice,
            theme: Theme::for_choice(theme_choice)?,
        })
    }

    /// Switches the active theme and its palette.
    ///
    /// # Errors
    ///
    /// Returns an error if the palette cannot be loaded; the current theme is
    /// kept in that case.
    pub fn set_theme(&mut self, choice: ThemeChoice) -> Result<()> {
        self.theme = Theme::for_choice(choice)?;
        self.theme_choice = choice;
        Ok(())
    }

    /// Records matching the current query, in directory order.
    #[must_use]
    pub fn visible_users(&self) -> Vec<&User> {
        filter_users(self.directory.list(), &self.search_query)
    }

    /// Computes a renderable view model for a terminal of `rows` by `cols`.
    ///
    /// Table rows that do not fit above the modal panel are counted in
    /// `hidden_rows` rather than rendered.
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let _span = tracing::trace_span!("compute_viewmodel", rows, cols).entered();

        let visible = self.visible_users();
        let modal = self.compute_modal_panel();
        let search_bar = self.compute_search_bar();

        let mut chrome = BASE_CHROME_ROWS;
        if search_bar.is_some() {
            chrome += SEARCH_BAR_ROWS;
        }
        if let Some(panel) = &modal {
            chrome += panel_height(panel);
        }
        let mut available_rows = rows.saturating_sub(chrome).max(1);
        if visible.len() > available_rows {
            // One line goes to the "N more" marker.
            available_rows = available_rows.saturating_sub(1).max(1);
        }

        let table_rows: Vec<UserRow> = visible
            .iter()
            .take(available_rows)
            .map(|user| self.compute_row(user, cols))
            .collect();
        let hidden_rows = visible.len() - table_rows.len();

        UIViewModel {
            header: self.compute_header(visible.len()),
            search_bar,
            empty_state: visible.is_empty().then(|| self.compute_empty_state()),
            rows: table_rows,
            hidden_rows,
            modal,
            footer: self.compute_footer(),
        }
    }

    fn compute_row(&self, user: &User, cols: usize) -> UserRow {
        let email_room = cols.saturating_sub(ID_COLUMN_WIDTH + NAME_COLUMN_WIDTH + "Viewer".len() + GUTTER);
        let email_width = (EMAIL_COLUMN_WIDTH - GUTTER).min(email_room.max(8));
        let (name, name_highlight) = self.cell(&user.name, NAME_COLUMN_WIDTH - GUTTER);
        let (email, email_highlight) = self.cell(&user.email, email_width);

        UserRow {
            id: user.id.to_string(),
            name,
            email,
            role: user.role.to_string(),
            name_highlight,
            email_highlight,
        }
    }

    /// Truncates `text` to `width` characters and locates the query match in
    /// what remains visible.
    fn cell(&self, text: &str, width: usize) -> (String, Option<(usize, usize)>) {
        let (display, kept_bytes) = truncate(text, width);
        let highlight = match_range(text, &self.search_query).and_then(|(start, end)| {
            (start < kept_bytes).then_some((start, end.min(kept_bytes)))
        });
        (display, highlight)
    }

    fn compute_header(&self, visible: usize) -> HeaderInfo {
        HeaderInfo {
            title: format!(" User Management Panel ({visible}/{}) ", self.directory.len()),
            theme_label: self.theme_choice.to_string(),
        }
    }

    fn compute_search_bar(&self) -> Option<SearchBarInfo> {
        (!self.search_query.is_empty()).then(|| SearchBarInfo {
            query: self.search_query.clone(),
        })
    }

    fn compute_empty_state(&self) -> EmptyState {
        let subtitle = if self.directory.is_empty() {
            "Type 'add' to create the first user".to_string()
        } else {
            format!("No name or email contains \"{}\"", self.search_query)
        };
        EmptyState {
            message: "No users found.".to_string(),
            subtitle,
        }
    }

    fn compute_modal_panel(&self) -> Option<ModalPanel> {
        match &self.modal {
            Modal::None => None,
            Modal::Detail { subject } => Some(ModalPanel {
                title: "User Details".to_string(),
                fields: vec![
                    ("ID".to_string(), subject.id.to_string()),
                    ("Name".to_string(), subject.name.clone()),
                    ("Email".to_string(), subject.email.clone()),
                    ("Role".to_string(), subject.role.to_string()),
                    ("Phone".to_string(), subject.phone.clone()),
                    ("Address".to_string(), subject.address.clone()),
                ],
                prompt: None,
            }),
            Modal::FormAdd { draft } | Modal::FormEdit { draft, .. } => {
                let (title, verb) = match self.modal.subject() {
                    Some(subject) => (format!("Edit User #{}", subject.id), "Update"),
                    None => ("Add New User".to_string(), "Add"),
                };
                let fields = FormField::ALL
                    .into_iter()
                    .map(|field| {
                        let value = match field {
                            FormField::Password => "*".repeat(draft.password.chars().count()),
                            _ => draft.get(field).to_string(),
                        };
                        (field.to_string(), value)
                    })
                    .collect();
                Some(ModalPanel {
                    title,
                    fields,
                    prompt: Some(format!("submit: {verb}  cancel: discard")),
                })
            }
            Modal::DeleteConfirm { subject } => {
                let name = if subject.name.trim().is_empty() {
                    "this user"
                } else {
                    subject.name.as_str()
                };
                Some(ModalPanel {
                    title: "Delete User".to_string(),
                    fields: vec![],
                    prompt: Some(format!("Are you sure you want to delete {name}?")),
                })
            }
        }
    }

    fn compute_footer(&self) -> FooterInfo {
        let keybindings = match &self.modal {
            Modal::None => {
                "view/edit/delete <id>  add  search <text>  export  theme  help  quit"
            }
            Modal::Detail { .. } => "close: back to table  quit",
            Modal::FormAdd { .. } | Modal::FormEdit { .. } => {
                "set <field> <value>  submit  cancel"
            }
            Modal::DeleteConfirm { .. } => "confirm: delete  cancel: keep",
        };

        FooterInfo {
            keybindings: keybindings.to_string(),
        }
    }
}

/// Title line, one line per field, optional prompt and the closing border.
fn panel_height(panel: &ModalPanel) -> usize {
    panel.fields.len() + usize::from(panel.prompt.is_some()) + 2
}

/// Keeps at most `width` characters, ending in `...` when cut. Returns the
/// display text and how many bytes of the original survive.
fn truncate(text: &str, width: usize) -> (String, usize) {
    if text.chars().count() <= width {
        return (text.to_string(), text.len());
    }
    let keep = width.saturating_sub(3);
    let kept_bytes = text.char_indices().nth(keep).map_or(text.len(), |(i, _)| i);
    (format!("{}...", &text[..kept_bytes]), kept_bytes)
}
