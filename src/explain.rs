// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Human-readable summaries of what a search matched and why.
//!
//! The generator re-runs query analysis (cheap, deterministic) rather than
//! threading the term/intent sets through the caller, and trusts the caller
//! to pass the exact result sequence the search returned - it never
//! re-filters or re-sorts, it only counts.

use crate::query::{detect_intents, extract_key_terms};
use crate::types::Listing;

/// Build a one-sentence explanation of a search.
///
/// Empty query or empty result set produce an empty string (the UI shows
/// nothing). A query that carried no usable terms or intents produces the
/// fixed "showing all" sentence. Otherwise the sentence names the matched
/// terms and, when intents fired, what the ranking prioritized.
pub fn search_explanation(query: &str, results: &[&Listing]) -> String {
    if query.is_empty() || results.is_empty() {
        return String::new();
    }

    let key_terms = extract_key_terms(query);
    let intents = detect_intents(query);

    if key_terms.is_empty() && intents.is_empty() {
        return "Showing all available products.".to_string();
    }

    let mut explanation = format!("Found {} products matching your search", results.len());

    if !key_terms.is_empty() {
        explanation.push_str(&format!(" for \"{}\"", key_terms.join(", ")));
    }

    if !intents.is_empty() {
        let labels: Vec<&str> = intents.iter().map(|i| i.display_label()).collect();
        explanation.push_str(&format!(", prioritizing {}", labels.join(", ")));
    }

    explanation.push('.');
    explanation
}
