//! Splitting of `#`-joined structured payloads.

use crate::prompt::ITEM_DELIMITER;

/// Split a structured payload into item texts.
///
/// Pieces are trimmed; empty pieces (e.g. from a trailing `#`) are dropped.
pub fn split_delimited(payload: &str) -> Vec<String> {
    payload
        .split(ITEM_DELIMITER)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
