//! Numbering and lettering cleanup for model output lines.

use regex::Regex;
use std::sync::LazyLock;

static ORDINAL_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[0-9]+\.").expect("ordinal pattern is valid"));

static OPTION_LETTER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*[a-eA-E][.)]").expect("option letter pattern is valid"));

/// Strip one leading ordinal such as `"12."` and trim the result.
///
/// ```
/// use exam_domain::parsing::strip_ordinal;
///
/// assert_eq!(strip_ordinal("1. What is 2+2?"), "What is 2+2?");
/// assert_eq!(strip_ordinal("What is 2+2?"), "What is 2+2?");
/// ```
pub fn strip_ordinal(line: &str) -> String {
    ORDINAL_PREFIX.replace(line, "").trim().to_string()
}

/// Strip one leading option letter such as `"b)"` or `"C."` and trim the result.
///
/// ```
/// use exam_domain::parsing::strip_option_letter;
///
/// assert_eq!(strip_option_letter("b) 4"), "4");
/// assert_eq!(strip_option_letter("4"), "4");
/// ```
pub fn strip_option_letter(line: &str) -> String {
    OPTION_LETTER_PREFIX.replace(line, "").trim().to_string()
}
