//! Empty state component renderer.

use crate::ui::helpers::{centered_line, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the message and a dimmed hint below it, both centred.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);
    print!(
        "{}{}{}",
        Theme::fg(&theme.colors.empty_state_fg),
        centered_line(&empty.message, cols),
        Theme::reset()
    );

    position_cursor(row + 1, 1);
    print!(
        "{}{}{}{}",
        Theme::dim(),
        Theme::fg(&theme.colors.text_dim),
        centered_line(&empty.subtitle, cols),
        Theme::reset()
    );

    row + 2
}
