//! Unconditional substitutions for the generic find-replace tool.
//!
//! Unlike the typographic pipeline there is no masking here: every
//! occurrence is rewritten, wherever it sits.

use once_cell::sync::Lazy;
use regex::Regex;

static ESCAPED_LT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\<").unwrap());
static ESCAPED_GT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\>").unwrap());
static ESCAPED_DOT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\\\.").unwrap());
static LINE_BREAK_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

/// Applies the fixed substitution set: unescape `\<`, `\>`, and `\.`, and
/// delete `<br>`-style line-break tags entirely.
pub fn apply_replacements(text: &str) -> String {
    let text = ESCAPED_LT.replace_all(text, "<");
    let text = ESCAPED_GT.replace_all(&text, ">");
    let text = ESCAPED_DOT.replace_all(&text, ".");
    LINE_BREAK_TAG.replace_all(&text, "").into_owned()
}
