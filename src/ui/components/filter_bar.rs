//! Filter bar component renderer.
//!
//! One line showing the three filter criteria:
//!
//! ```text
//!  Search: cafe█  │  Category: Restaurant  │  Min Rating: 4+
//! ```
//!
//! While the query is being edited the search segment is drawn in the accent
//! color with a block cursor.

use crate::ui::helpers::{char_len, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::FilterBarInfo;

const SEPARATOR: &str = "  │  ";

/// Renders the filter bar at `row` and returns the next row.
pub fn render_filter_bar(row: usize, bar: &FilterBarInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    let search_text = if bar.is_editing_query {
        format!(" Search: {}█", bar.query)
    } else if bar.query.is_empty() {
        " Search: (press /)".to_string()
    } else {
        format!(" Search: {}", bar.query)
    };

    if bar.is_editing_query {
        print!("{}", Theme::bold());
        print!("{}", Theme::fg(&theme.colors.filter_bar_border));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{search_text}");
    print!("{}", Theme::reset());

    let category_text = format!("Category: {}", bar.category);

    print!("{}", Theme::fg(&theme.colors.border));
    print!("{SEPARATOR}");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{category_text}");
    print!("{}", Theme::fg(&theme.colors.border));
    print!("{SEPARATOR}");
    print!("{}", Theme::fg(&theme.colors.rating_fg));
    print!("{}", bar.min_rating);

    let line_len = char_len(&search_text)
        + char_len(&category_text)
        + char_len(&bar.min_rating)
        + 2 * char_len(SEPARATOR);
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));
    print!("{}", Theme::reset());

    row + 1
}
