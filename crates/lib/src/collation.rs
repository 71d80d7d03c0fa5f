//! Locale-aware string ordering for facility names.
//!
//! Names are compared in three tiers: base letters first (ignoring accents
//! and case), then accents, then case with lowercase sorting first. Strings
//! equal under all three tiers fall back to code point order so the result
//! is a total order.

use std::cmp::Ordering;

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Primary-strength collation key: NFD decomposition, combining marks
/// removed, Unicode lowercase.
fn collation_key(input: &str) -> String {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

fn accent_key(input: &str) -> String {
    input.nfd().flat_map(char::to_lowercase).collect()
}

fn case_key(input: &str) -> Vec<bool> {
    input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .map(char::is_uppercase)
        .collect()
}

pub fn locale_compare(a: &str, b: &str) -> Ordering {
    collation_key(a)
        .cmp(&collation_key(b))
        .then_with(|| accent_key(a).cmp(&accent_key(b)))
        .then_with(|| case_key(a).cmp(&case_key(b)))
        .then_with(|| a.cmp(b))
}
