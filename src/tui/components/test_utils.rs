//! Helpers shared by tests that inspect rendered output.

/// Removes ANSI escape sequences, leaving only the visible text.
///
/// # Example
///
/// ```
/// use reviewgrid::tui::components::test_utils::strip_ansi_codes;
///
/// let coloured = "\x1b[38;2;133;204;0m███\x1b[0m";
/// assert_eq!(strip_ansi_codes(coloured), "███");
/// ```
#[must_use]
pub fn strip_ansi_codes(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut in_escape = false;

    for ch in s.chars() {
        if ch == '\x1b' {
            in_escape = true;
        } else if in_escape {
            // Sequences end with their first alphabetic character.
            in_escape = !ch.is_ascii_alphabetic();
        } else {
            result.push(ch);
        }
    }

    result
}
