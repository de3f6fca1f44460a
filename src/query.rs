// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query analysis: key-term extraction and intent detection.
//!
//! Both functions are pure and operate on the raw query string, but in
//! different ways. Extraction tokenizes: lowercase, strip punctuation, split
//! on whitespace, drop stop words and short tokens. Detection does substring
//! containment against the lower-cased query as a whole, so multi-word
//! trigger phrases ("cash flow", "user base") fire even though the tokenizer
//! would split them.
//!
//! Duplicates survive extraction on purpose - the scorer counts occurrences,
//! and collapsing "saas saas" to one term would change the ranking.

use tracing::debug;

use crate::types::Intent;
use crate::utils::normalize_query;

/// Common words filtered out of search queries. Includes search-intent verbs
/// ("looking", "find", "show") so "looking for a profitable app" reduces to
/// the words that actually discriminate.
const STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "is", "are", "was", "were", "be", "been", "being", "in",
    "on", "at", "to", "for", "with", "by", "about", "like", "through", "over", "before", "after",
    "between", "under", "above", "of", "during", "would", "could", "should", "can", "will", "i",
    "you", "he", "she", "it", "we", "they", "this", "that", "these", "those", "look", "looking",
    "find", "finding", "search", "searching", "want", "wanting", "need", "needing", "interested",
    "seeking", "show", "showing", "display", "displaying",
];

/// Trigger phrases per intent category, checked in `Intent::ALL` order.
///
/// Matching is substring containment against the lower-cased query. The first
/// phrase that hits settles the category and checking moves on to the next
/// one, so ordering within a list only affects how fast a category resolves,
/// not the result.
fn intent_triggers(intent: Intent) -> &'static [&'static str] {
    match intent {
        Intent::Revenue => &[
            "revenue",
            "arr",
            "sales",
            "income",
            "profitable",
            "profit",
            "money",
            "earning",
            "cash flow",
            "making money",
        ],
        Intent::Growth => &[
            "growing",
            "growth",
            "scaling",
            "scale",
            "expanding",
            "expand",
            "increase",
            "increasing",
            "opportunity",
            "opportunities",
        ],
        Intent::Age => &[
            "old",
            "new",
            "established",
            "startup",
            "start-up",
            "mature",
            "young",
            "early stage",
            "late stage",
            "years",
            "months",
            "year old",
        ],
        Intent::Users => &[
            "users",
            "customers",
            "user base",
            "customer base",
            "audience",
            "subscribers",
            "active users",
            "monthly active",
        ],
        Intent::Industry => &[
            "saas",
            "software",
            "tech",
            "technology",
            "health",
            "healthcare",
            "education",
            "e-commerce",
            "ecommerce",
            "fintech",
            "financial",
            "marketplace",
            "platform",
            "app",
            "application",
            "mobile",
            "web",
            "b2b",
            "b2c",
            "content",
            "media",
            "entertainment",
            "gaming",
        ],
    }
}

/// Extract the meaningful key terms from a free-text query.
///
/// Tokens survive when they are longer than two characters and not stop
/// words. Relative order is preserved and duplicates are retained. An empty
/// or all-filler query yields an empty vector.
pub fn extract_key_terms(query: &str) -> Vec<String> {
    let cleaned = normalize_query(query);
    let terms: Vec<String> = cleaned
        .split_whitespace()
        .filter(|word| word.len() > 2 && !STOP_WORDS.contains(word))
        .map(str::to_string)
        .collect();
    debug!(query, terms = ?terms, "extracted key terms");
    terms
}

/// Detect which intent categories a query triggers.
///
/// Returns the matched categories in `Intent::ALL` order, each at most once.
pub fn detect_intents(query: &str) -> Vec<Intent> {
    let lower = query.to_lowercase();
    let detected: Vec<Intent> = Intent::ALL
        .into_iter()
        .filter(|intent| {
            intent_triggers(*intent)
                .iter()
                .any(|trigger| lower.contains(trigger))
        })
        .collect();
    debug!(query, intents = ?detected, "detected intents");
    detected
}
