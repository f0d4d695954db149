use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static COMMAND_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/[A-Za-z0-9_]+").expect("static regex to compile"));

/// Command names are matched case-insensitively; arguments are left untouched.
#[must_use]
pub fn normalize_command(text: &str) -> String {
    COMMAND_WORD
        .replace(text.trim(), |captures: &Captures<'_>| captures[0].to_lowercase())
        .to_string()
}
