//! Table component: ID, NAME, EMAIL and ROLE columns with match highlighting.

use crate::ui::helpers::{push_highlighted, push_padded, width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{UserRow, EMAIL_COLUMN_WIDTH, ID_COLUMN_WIDTH, NAME_COLUMN_WIDTH};

/// Appends the bold column header line.
pub fn render_table_headers(out: &mut String, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.header_fg));
    let line = format!(
        "{:<id$}{:<name$}{:<email$}{}",
        "ID",
        "NAME",
        "EMAIL",
        "ROLE",
        id = ID_COLUMN_WIDTH,
        name = NAME_COLUMN_WIDTH,
        email = EMAIL_COLUMN_WIDTH,
    );
    push_padded(out, &line, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends one line per row, then a dimmed marker if rows were cut off.
pub fn render_table_rows(out: &mut String, rows: &[UserRow], hidden: usize, theme: &Theme) {
    for row in rows {
        render_table_row(out, row, theme);
    }

    if hidden > 0 {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(&format!("  … {hidden} more"));
        out.push_str(Theme::reset());
        out.push('\n');
    }
}

fn render_table_row(out: &mut String, row: &UserRow, theme: &Theme) {
    let base_fg = &theme.colors.text_normal;
    out.push_str(&Theme::fg(base_fg));

    push_padded(out, &row.id, ID_COLUMN_WIDTH);

    push_highlighted(out, &row.name, row.name_highlight, theme, base_fg);
    out.push_str(&" ".repeat(NAME_COLUMN_WIDTH.saturating_sub(width(&row.name))));

    push_highlighted(out, &row.email, row.email_highlight, theme, base_fg);
    out.push_str(&" ".repeat(EMAIL_COLUMN_WIDTH.saturating_sub(width(&row.email))));

    out.push_str(&row.role);
    out.push_str(Theme::reset());
    out.push('\n');
}
