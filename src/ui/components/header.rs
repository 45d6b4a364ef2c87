//! Header component: title bar with the active theme on the right.

use crate::ui::helpers::{push_centered, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Appends the header line.
///
/// The title is centered in the space left of the `[theme]` label. When the
/// terminal is too narrow for both, the label is dropped.
pub fn render_header(out: &mut String, header: &HeaderInfo, theme: &Theme, cols: usize) {
    let label = format!("[{}] ", header.theme_label);
    let show_label = width(&header.title) + width(&label) <= cols;
    let title_cols = if show_label { cols - width(&label) } else { cols };

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    if let Some(bg) = &theme.colors.header_bg {
        out.push_str(&Theme::bg(bg));
    }

    push_centered(out, &header.title, title_cols);
    if show_label {
        out.push_str(Theme::reset());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        if let Some(bg) = &theme.colors.header_bg {
            out.push_str(&Theme::bg(bg));
        }
        out.push_str(&label);
    }

    out.push_str(Theme::reset());
    out.push('\n');
}
