//! Actions representing side effects to be executed by the front-end.
//!
//! The event handler never performs I/O. It returns a `Vec<Action>` after each
//! event and the front-end executes them in order: showing notifications,
//! handing the CSV export to the download collaborator, persisting the theme
//! and exiting.
//!
//! # Example
//!
//! ```
//! use userdeck::app::{Action, Notification};
//!
//! let actions = vec![Action::Notify(Notification::success("User added successfully!"))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::domain::ThemeChoice;

/// Severity of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A transient message for the user, e.g. a toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Success,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }
}

/// Commands the front-end executes after an event has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Shows a success or error message.
    Notify(Notification),

    /// Hands a file to the download collaborator.
    Download {
        /// Suggested file name, `users.csv` for exports.
        filename: String,
        /// Full file contents.
        contents: String,
    },

    /// Persists the theme choice under the `theme` preference key.
    SaveTheme(ThemeChoice),

    /// Ends the session.
    Quit,
}
