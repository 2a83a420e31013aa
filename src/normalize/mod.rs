//! Whitespace normalization used by the `one_line` tool.

/// Flattens `text` onto a single line.
///
/// Newlines and tabs become spaces, every run of ASCII whitespace
/// (space, `\t`, `\n`, `\r`, form feed) collapses to one space, and
/// leading/trailing whitespace is trimmed.
pub fn normalize(text: &str) -> String {
    text.split_ascii_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_owned()
}
