//! Shared rendering utilities.
//!
//! All text measurements here are in characters, not bytes, so listing names
//! in Bengali script are cut and highlighted on character boundaries.

use crate::ui::theme::Theme;

/// Positions the cursor at a 1-indexed row and column.
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Number of characters in `text`.
#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shortens `text` to at most `width` characters, ending in `...` when cut.
///
/// # Examples
///
/// ```
/// use barlekha_directory::ui::helpers::truncate_text;
///
/// assert_eq!(truncate_text("Cafe Barlekha", 20), "Cafe Barlekha");
/// assert_eq!(truncate_text("Barlekha General Hospital", 12), "Barlekha ...");
/// ```
#[must_use]
pub fn truncate_text(text: &str, width: usize) -> String {
    if char_len(text) <= width {
        return text.to_string();
    }
    if width <= 3 {
        return text.chars().take(width).collect();
    }
    let kept: String = text.chars().take(width - 3).collect();
    format!("{kept}...")
}

/// Character ranges where `needle` occurs in `text`, ignoring case.
///
/// `needle` must already be lower-cased. Occurrences are found left to right
/// without overlapping; ranges are `(start, end)` character indices, end
/// exclusive.
///
/// # Examples
///
/// ```
/// use barlekha_directory::ui::helpers::match_ranges;
///
/// assert_eq!(match_ranges("Cafe Barlekha", "barlekha"), [(5, 13)]);
/// assert!(match_ranges("Central Bazar", "ca").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, needle: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = needle.chars().collect();
    if needle.is_empty() {
        return vec![];
    }

    // Lower-cased characters paired with the index of the source character.
    let folded: Vec<(char, usize)> = text
        .chars()
        .enumerate()
        .flat_map(|(i, c)| c.to_lowercase().map(move |lower| (lower, i)))
        .collect();

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= folded.len() {
        let window = &folded[pos..pos + needle.len()];
        if window.iter().map(|(c, _)| c).eq(needle.iter()) {
            ranges.push((window[0].1, window[needle.len() - 1].1 + 1));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }
    ranges
}

/// `text` centred in a line of exactly `cols` characters.
#[must_use]
pub fn centered_line(text: &str, cols: usize) -> String {
    let text = truncate_text(text, cols);
    let len = char_len(&text);
    let left = (cols - len) / 2;
    format!("{}{text}{}", " ".repeat(left), " ".repeat(cols - len - left))
}

/// Prints `text` with the given character ranges in match-highlight colors.
///
/// Highlighting is skipped on the selected row so the selection background
/// stays uniform. Ranges past the end of `text` are clipped.
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() || is_selected {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.min(chars.len());
        let end = end.min(chars.len());
        if start < current_pos || start >= end {
            continue;
        }

        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
