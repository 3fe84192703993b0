//! Footer component renderer.

use crate::ui::helpers::{char_len, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FooterInfo;

/// Renders the status message and key hints at `row`, returning the next row.
///
/// ```text
/// [status]  [left padding] keybindings [right padding]
/// ```
///
/// The status message, when present, is printed flush left in the notice
/// color; the hints are centred in the remaining width and cut to fit.
pub fn render_footer(row: usize, footer: &FooterInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let mut used = 0;
    if let Some(status) = &footer.status {
        let status = truncate_text(status, cols / 3);
        print!("{}", Theme::fg(&theme.colors.notice_fg));
        print!(" {status} ");
        used = char_len(&status) + 2;
    }

    let remaining = cols.saturating_sub(used);
    let help_text = truncate_text(&footer.keybindings, remaining);
    let text_len = char_len(&help_text);
    let padding = (remaining.saturating_sub(text_len)) / 2;

    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(padding));
    print!("{help_text}");
    print!("{}", " ".repeat(remaining.saturating_sub(padding + text_len)));
    print!("{}", Theme::reset());
    row + 1
}
