// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! String helpers shared by query analysis, scoring, and filtering.

/// Punctuation stripped from queries before tokenization.
///
/// Stripped characters are removed outright (not replaced with spaces), so
/// "e-commerce" tokenizes as "ecommerce". Apostrophes are deliberately not in
/// the set; "it's" survives as a single token.
const QUERY_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// Normalize a query for tokenization: lowercase and strip punctuation.
///
/// Whitespace runs are preserved; the tokenizer splits on them afterwards.
pub fn normalize_query(query: &str) -> String {
    query
        .to_lowercase()
        .chars()
        .filter(|c| !QUERY_PUNCTUATION.contains(c))
        .collect()
}

/// Extract the digits of a free-text amount like "$250,000".
///
/// Strips every non-digit character and parses what remains. This is not a
/// currency parser and has documented blind spots: "$1.2 million" collapses
/// to 12, so callers that care about millions must check for the word itself
/// (the revenue scorer does exactly that). Returns `None` when the text
/// contains no digits, or when the digit run overflows `u64`.
pub fn parse_amount_digits(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
