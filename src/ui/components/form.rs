//! Draft form component renderer.
//!
//! ```text
//!   Name          Barlekha Pharmacy█
//!   Category      Health
//!   Address       (Address)
//!   ...
//!
//!   [ Add Listing ]   A listing needs a category
//! ```

use crate::ui::helpers::{char_len, position_cursor, truncate_text};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{FormFieldInfo, FormInfo};

const LABEL_WIDTH: usize = 16;
const INDENT: &str = "  ";

/// Renders the form starting at `row` and returns the row after it.
pub fn render_form(row: usize, form: &FormInfo, theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for field in &form.fields {
        current_row = render_field(current_row, field, theme, cols);
    }

    current_row += 1;
    position_cursor(current_row, 1);

    let button = format!("{INDENT}[ {} ]", form.submit_label);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{button}");
    print!("{}", Theme::reset());

    let mut used = char_len(&button);
    if let Some(notice) = &form.notice {
        let notice = truncate_text(&format!("   {notice}"), cols.saturating_sub(used));
        print!("{}", Theme::fg(&theme.colors.notice_fg));
        print!("{notice}");
        print!("{}", Theme::reset());
        used += char_len(&notice);
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    current_row + 1
}

fn render_field(row: usize, field: &FormFieldInfo, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if field.is_focused {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    let label = format!("{INDENT}{:<LABEL_WIDTH$}", field.label);
    print!("{label}");

    let value_width = cols.saturating_sub(char_len(&label) + 1);
    let value = if field.value.is_empty() && !field.is_focused {
        print!("{}", Theme::dim());
        format!("({})", field.label)
    } else {
        print!("{}", Theme::fg(if field.is_focused {
            &theme.colors.selection_fg
        } else {
            &theme.colors.text_normal
        }));
        field.value.clone()
    };
    let value = truncate_text(&value, value_width);
    print!("{value}");

    let mut used = char_len(&label) + char_len(&value);
    if field.is_focused {
        print!("█");
        used += 1;
    }
    print!("{}", " ".repeat(cols.saturating_sub(used)));

    print!("{}", Theme::reset());
    row + 1
}
