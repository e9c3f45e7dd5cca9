//! Width and height fitting for grid cells and overlays.
//!
//! Widths are measured in terminal columns, not Unicode scalar count.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ANSI_RESET: &str = "\x1b[0m";
const ELLIPSIS: &str = "...";

/// Truncates output to at most `max_height` lines, the last being `...`.
///
/// A zero height leaves the output untouched.
pub(crate) fn truncate_to_height(output: &mut String, max_height: usize) {
    if max_height == 0 || output.lines().count() <= max_height {
        return;
    }

    let keep = max_height.saturating_sub(1);
    let cut = output
        .match_indices('\n')
        .nth(keep.saturating_sub(1))
        .map_or(0, |(index, _)| if keep == 0 { 0 } else { index + 1 });
    output.truncate(cut);
    if output.contains("\x1b[") {
        output.push_str(ANSI_RESET);
    }
    output.push_str(ELLIPSIS);
    output.push('\n');
}

/// Truncates text to the provided display width and appends an ellipsis.
///
/// Widths of three or less cannot hold an ellipsis after any text and are
/// filled with dots instead.
pub(crate) fn truncate_to_display_width_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if text.width() <= max_width {
        return text.to_owned();
    }
    if max_width <= ELLIPSIS.len() {
        return ".".repeat(max_width);
    }

    let target_width = max_width.saturating_sub(ELLIPSIS.len());
    let mut truncated = String::new();
    let mut current_width = 0_usize;
    for ch in text.chars() {
        let char_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if current_width.saturating_add(char_width) > target_width {
            break;
        }
        truncated.push(ch);
        current_width = current_width.saturating_add(char_width);
    }
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Fits single-line text into exactly `width` columns.
///
/// Line breaks and tabs become spaces, long text is truncated with an
/// ellipsis and short text is padded on the right.
pub(crate) fn fit_to_width(text: &str, width: usize) -> String {
    let flattened: String = text
        .chars()
        .map(|ch| if ch.is_control() { ' ' } else { ch })
        .collect();
    let mut fitted = truncate_to_display_width_with_ellipsis(&flattened, width);
    let padding = width.saturating_sub(fitted.width());
    fitted.extend(std::iter::repeat_n(' ', padding));
    fitted
}
