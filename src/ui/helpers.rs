//! Shared rendering utilities.
//!
//! Components write into a `String` frame line by line. Widths are measured in
//! characters, not bytes, so accented names pad correctly.

use crate::ui::theme::Theme;

/// Display width of `text` in characters.
#[must_use]
pub fn width(text: &str) -> usize {
    text.chars().count()
}

/// Appends `text` padded with spaces to `cols` characters.
pub fn push_padded(out: &mut String, text: &str, cols: usize) {
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(width(text))));
}

/// Appends `text` centered in `cols` characters. Odd padding goes to the right.
pub fn push_centered(out: &mut String, text: &str, cols: usize) {
    let text_len = width(text).min(cols);
    let left = cols.saturating_sub(text_len) / 2;
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(cols.saturating_sub(left + text_len)));
}

/// Appends `text`, drawing the byte range `highlight` in the match colors and
/// restoring `base_fg` afterwards.
///
/// A range that does not fall on character boundaries of `text` is ignored.
///
/// ```
/// use userdeck::domain::ThemeChoice;
/// use userdeck::ui::helpers::push_highlighted;
/// use userdeck::ui::Theme;
///
/// let theme = Theme::for_choice(ThemeChoice::Light)?;
/// let mut out = String::new();
/// push_highlighted(&mut out, "alice", Some((0, 2)), &theme, &theme.colors.text_normal);
/// assert!(out.contains("al"));
/// assert!(out.ends_with("ice"));
/// # Ok::<(), userdeck::DirectoryError>(())
/// ```
pub fn push_highlighted(
    out: &mut String,
    text: &str,
    highlight: Option<(usize, usize)>,
    theme: &Theme,
    base_fg: &str,
) {
    let Some((start, end)) = highlight else {
        out.push_str(text);
        return;
    };
    let (Some(before), Some(matched), Some(after)) =
        (text.get(..start), text.get(start..end), text.get(end..))
    else {
        out.push_str(text);
        return;
    };

    out.push_str(before);
    out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
    out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
    out.push_str(matched);
    out.push_str(Theme::reset());
    out.push_str(&Theme::fg(base_fg));
    out.push_str(after);
}
