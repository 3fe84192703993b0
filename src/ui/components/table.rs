//! Table component renderer.
//!
//! Renders the visible listings as a five-column table (NAME, CATEGORY,
//! RATING, PHONE, ADDRESS) with selection and query-match highlighting, plus
//! the detail line describing the selected listing.

use crate::ui::helpers::{self, char_len, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    DetailInfo, DisplayItem, CATEGORY_COLUMN_WIDTH, NAME_COLUMN_WIDTH, PHONE_COLUMN_WIDTH,
    RATING_COLUMN_WIDTH,
};

/// Renders the column headers at `row` and returns the next row.
pub fn render_table_headers(row: usize, theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!(
        "{:<name$}{:<category$}{:<rating$}{:<phone$}{}",
        "NAME",
        "CATEGORY",
        "RATING",
        "PHONE",
        "ADDRESS",
        name = NAME_COLUMN_WIDTH,
        category = CATEGORY_COLUMN_WIDTH,
        rating = RATING_COLUMN_WIDTH,
        phone = PHONE_COLUMN_WIDTH,
    );
    print!("{}", Theme::reset());
    row + 1
}

/// Renders every item, one per row, and returns the row after the last.
pub fn render_table_rows(row: usize, items: &[DisplayItem], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders one listing.
///
/// Styling precedence: selection background, then match highlights in the
/// name column, then per-column colors. The line is padded to `cols` so the
/// selection background spans the full width.
fn render_table_row(row: usize, item: &DisplayItem, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let base_fg = if item.is_selected {
        print!("{}", Theme::bg(&theme.colors.selection_bg));
        &theme.colors.selection_fg
    } else {
        &theme.colors.text_normal
    };
    print!("{}", Theme::fg(base_fg));

    helpers::render_highlighted_text(&item.name, &item.highlight_ranges, theme, item.is_selected);
    pad(char_len(&item.name), NAME_COLUMN_WIDTH);

    print!("{}", item.category);
    pad(char_len(&item.category), CATEGORY_COLUMN_WIDTH);

    if !item.is_selected {
        let rating_fg = if item.is_unrated {
            &theme.colors.text_dim
        } else {
            &theme.colors.rating_fg
        };
        print!("{}", Theme::fg(rating_fg));
    }
    print!("{}", item.rating);
    pad(char_len(&item.rating), RATING_COLUMN_WIDTH);
    print!("{}", Theme::fg(base_fg));

    print!("{}", item.phone);
    pad(char_len(&item.phone), PHONE_COLUMN_WIDTH);

    print!("{}", item.address);

    let line_len = NAME_COLUMN_WIDTH
        + CATEGORY_COLUMN_WIDTH
        + RATING_COLUMN_WIDTH
        + PHONE_COLUMN_WIDTH
        + char_len(&item.address);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Renders the selected listing's coordinates, map link and image URL.
pub fn render_detail_line(row: usize, detail: &DetailInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let coordinates = format!(" {}  ", detail.coordinates);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{coordinates}");

    let link_width = cols.saturating_sub(char_len(&coordinates));
    let link = truncate_text(&detail.map_link, link_width);
    print!("{}", Theme::fg(&theme.colors.link_fg));
    print!("{link}");

    let mut used = char_len(&coordinates) + char_len(&link);
    if !detail.image.is_empty() {
        let image = truncate_text(&format!("  Image: {}", detail.image), cols.saturating_sub(used));
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{image}");
        used += char_len(&image);
    }

    print!("{}", " ".repeat(cols.saturating_sub(used)));
    print!("{}", Theme::reset());
    row + 1
}

fn pad(len: usize, width: usize) {
    print!("{}", " ".repeat(width.saturating_sub(len)));
}
