//! Modal panel component: a bordered box drawn under the table.

use crate::ui::helpers::{push_padded, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::ModalPanel;

const MODAL_MARGIN: usize = 2;
const MAX_MODAL_WIDTH: usize = 64;

/// Appends the panel.
///
/// ```text
///   ┌─ User Details ─────────────┐
///   │ Name     Ann               │
///   │ Are you sure ...?          │
///   └────────────────────────────┘
/// ```
pub fn render_modal(out: &mut String, panel: &ModalPanel, theme: &Theme, cols: usize) {
    let inner_width = cols
        .saturating_sub(MODAL_MARGIN * 2 + 2)
        .min(MAX_MODAL_WIDTH);
    let label_width = panel.fields.iter().map(|(label, _)| width(label)).max().unwrap_or(0) + 2;
    let margin = " ".repeat(MODAL_MARGIN);
    let border = Theme::fg(&theme.colors.modal_border);

    let title: String = format!("─ {} ", panel.title).chars().take(inner_width).collect();
    out.push_str(&margin);
    out.push_str(&border);
    out.push('┌');
    out.push_str(Theme::bold());
    out.push_str(&title);
    out.push_str(Theme::reset());
    out.push_str(&border);
    out.push_str(&"─".repeat(inner_width.saturating_sub(width(&title))));
    out.push('┐');
    out.push_str(Theme::reset());
    out.push('\n');

    for (label, value) in &panel.fields {
        let line = format!(" {label:<label_width$}{value}");
        push_boxed_line(out, &margin, &border, &theme.colors.text_normal, &line, inner_width);
    }

    if let Some(prompt) = &panel.prompt {
        let line = format!(" {prompt}");
        push_boxed_line(out, &margin, &border, &theme.colors.header_fg, &line, inner_width);
    }

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');
}

fn push_boxed_line(out: &mut String, margin: &str, border: &str, text_fg: &str, line: &str, inner_width: usize) {
    let line: String = line.chars().take(inner_width).collect();

    out.push_str(margin);
    out.push_str(border);
    out.push('│');
    out.push_str(&Theme::fg(text_fg));
    push_padded(out, &line, inner_width);
    out.push_str(border);
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');
}
