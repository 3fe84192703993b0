//! Header component renderer.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the title bar at `row` and returns the next row.
pub fn render_header(row: usize, header: &HeaderInfo, theme: &Theme, cols: usize) -> usize {
    let colors = &theme.colors;
    let background = colors.header_bg.as_deref().map(Theme::bg).unwrap_or_default();

    position_cursor(row, 1);
    print!(
        "{}{}{background}{}{}",
        Theme::bold(),
        Theme::fg(&colors.header_fg),
        centered_line(&header.title, cols),
        Theme::reset()
    );
    row + 1
}
