//! Composable UI component renderers.
//!
//! # Components
//!
//! - [`header`]: Title bar with counts
//! - [`filter_bar`]: Query, category and minimum rating
//! - [`table`]: Listing table and the selection's detail line
//! - [`form`]: Draft form
//! - [`empty`]: Message shown when nothing is visible
//! - [`footer`]: Status message and key hints
//!
//! # Layout Modes
//!
//! - [`render_browse_mode`]: Header + Filter bar + Table + Detail + Footer
//! - [`render_form_mode`]: Header + Form + Footer

mod empty;
mod filter_bar;
mod footer;
mod form;
mod header;
mod table;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormInfo, UIViewModel};

use empty::render_empty_state;
use filter_bar::render_filter_bar;
use footer::render_footer;
use form::render_form;
use header::render_header;
use table::{render_detail_line, render_table_headers, render_table_rows};

/// Renders a horizontal border line at `row` and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

fn render_bottom(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the browse and search layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Filter bar]
/// [Table Headers]
/// [Table Rows | Empty state]
/// [Blank padding to fill screen]
/// [Detail line]
/// [Border]
/// [Footer]
/// ```
pub fn render_browse_mode(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_filter_bar(current_row, &vm.filter_bar, theme, cols);
    current_row = render_table_headers(current_row, theme);

    if let Some(empty) = &vm.empty_state {
        render_empty_state(current_row + 1, empty, theme, cols);
    } else {
        render_table_rows(current_row, &vm.display_items, theme, cols);
    }

    if let Some(detail) = &vm.detail {
        render_detail_line(rows.saturating_sub(3), detail, theme, cols);
    }
    render_bottom(vm, theme, cols, rows);
}

/// Renders the draft form layout.
///
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Form fields]
/// [Submit line with notice]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
pub fn render_form_mode(vm: &UIViewModel, form: &FormInfo, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2;

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    render_form(current_row + 1, form, theme, cols);

    render_bottom(vm, theme, cols, rows);
}
