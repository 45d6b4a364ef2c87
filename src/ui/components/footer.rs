//! Footer component: centered command hints.

use crate::ui::helpers::push_centered;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Appends the footer line, truncating hints that do not fit.
pub fn render_footer(out: &mut String, footer: &FooterInfo, theme: &Theme, cols: usize) {
    let hints: String = footer.keybindings.chars().take(cols).collect();

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    push_centered(out, &hints, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
