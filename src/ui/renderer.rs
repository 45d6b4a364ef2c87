//! Top-level rendering coordinator.
//!
//! Rendering is two steps: compute the [`UIViewModel`] from state, then let the
//! components append their lines to a frame. The frame is returned as a string
//! so the front-end decides where it goes.
//!
//! # Example
//!
//! ```
//! use userdeck::app::AppState;
//! use userdeck::directory::DirectoryStore;
//! use userdeck::domain::ThemeChoice;
//! use userdeck::ui::render;
//!
//! let state = AppState::new(DirectoryStore::new(), ThemeChoice::Dark)?;
//! let frame = render(&state, 24, 80);
//! assert!(frame.contains("No users found."));
//! # Ok::<(), userdeck::DirectoryError>(())
//! ```

use crate::app::{AppState, Notification, NotificationKind};
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

/// Renders the whole screen for a terminal of `rows` by `cols`.
#[must_use]
pub fn render(state: &AppState, rows: usize, cols: usize) -> String {
    let viewmodel = state.compute_viewmodel(rows, cols);
    render_viewmodel(&viewmodel, &state.theme, cols)
}

/// Renders a precomputed view model.
#[must_use]
pub fn render_viewmodel(vm: &UIViewModel, theme: &Theme, cols: usize) -> String {
    let mut frame = String::new();
    components::render_layout(&mut frame, vm, theme, cols);
    frame
}

/// Renders a notification as one colored line.
#[must_use]
pub fn render_notification(notification: &Notification, theme: &Theme) -> String {
    let (color, marker) = match notification.kind {
        NotificationKind::Success => (&theme.colors.success_fg, "✔"),
        NotificationKind::Error => (&theme.colors.error_fg, "✖"),
    };
    format!(
        "{}{} {}{}",
        Theme::fg(color),
        marker,
        notification.message,
        Theme::reset()
    )
}
