use itertools::Itertools;

/// Upper bound of keywords accepted from one message.
pub const MAX_KEYWORDS: usize = 10;

/// Splits free text into lower-cased, deduplicated keywords, keeping the first
/// [`MAX_KEYWORDS`] in the order they were written.
#[must_use]
pub fn normalize_keywords(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .unique()
        .take(MAX_KEYWORDS)
        .map(ToString::to_string)
        .collect()
}

/// Makes user text safe to use as a `LIKE` operand with `ESCAPE '\'`.
#[must_use]
pub fn escape_like(text: &str) -> String {
    // the escape character has to go first
    text.replace('\\', r"\\")
        .replace('%', r"\%")
        .replace('_', r"\_")
}
