//! Composable UI component renderers.
//!
//! Each component appends its lines to the frame being built.
//!
//! # Components
//!
//! - `header`: title bar with the theme label
//! - `search`: search box, present while a query is active
//! - `table`: user rows with match highlighting
//! - `empty`: message shown when no record is visible
//! - `modal`: the open detail, form or confirmation panel
//! - `footer`: command hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines, optional]
//! [Table Headers]
//! [Table Rows | Empty State]
//! [Modal Panel, optional]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod modal;
mod search;
mod table;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::UIViewModel;

use empty::render_empty_state;
use footer::render_footer;
use header::render_header;
use modal::render_modal;
use search::render_search_bar;
use table::{render_table_headers, render_table_rows};

/// Appends a full-width horizontal rule.
fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Appends every component of `vm` in layout order.
pub fn render_layout(out: &mut String, vm: &UIViewModel, theme: &Theme, cols: usize) {
    out.push('\n');
    render_header(out, &vm.header, theme, cols);
    render_border(out, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        render_search_bar(out, search, theme, cols);
    }

    render_table_headers(out, theme, cols);
    match &vm.empty_state {
        Some(empty) => render_empty_state(out, empty, theme, cols),
        None => render_table_rows(out, &vm.rows, vm.hidden_rows, theme),
    }

    if let Some(panel) = &vm.modal {
        render_modal(out, panel, theme, cols);
    }

    render_border(out, &theme.colors.border, cols);
    render_footer(out, &vm.footer, theme, cols);
}
