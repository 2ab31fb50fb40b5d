//! Deterministic repair of known recognition-corruption signatures.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Israeli mobile prefix misread: leading `0` recognized as `8`
    static ref CORRUPT_MOBILE: Regex = Regex::new(r"\b85(\d{8})\b").unwrap();

    /// Same misread with the `8` detached from the rest of the number
    static ref CORRUPT_MOBILE_SPACED: Regex = Regex::new(r"\b8\s*(5\d{7})\b").unwrap();

    /// Whitespace runs, including newlines
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
}

/// Repair known OCR corruption patterns and normalize whitespace.
///
/// Total and idempotent. Corruption fixes run before whitespace collapsing
/// since the corrupted digits may be split across irregular spacing.
pub fn clean_ocr_artifacts(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let cleaned = CORRUPT_MOBILE.replace_all(text, "05$1");
    let cleaned = CORRUPT_MOBILE_SPACED.replace_all(&cleaned, "05$1");
    let cleaned = WHITESPACE_RUN.replace_all(&cleaned, " ");
    cleaned.trim().to_string()
}
