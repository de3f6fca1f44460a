// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search orchestration: analyze the query once, score every listing, rank.
//!
//! Two deliberately distinct "return everything" branches exist:
//!
//! 1. Empty or whitespace-only query - the caller asked for nothing, give
//!    back the catalog untouched.
//! 2. Query text that yields no key terms AND no intents (pure filler like
//!    "show me the") - nothing to score by, same identity pass-through.
//!
//! A query with surviving terms that simply match nothing is NOT one of
//! these: scoring runs, every listing lands on zero, and the result is
//! empty. "xyzzy gibberish" finds nothing; "show me the" shows everything.
//!
//! Ranking is a stable descending sort on score, so equally scored listings
//! keep their catalog order and the whole pipeline stays deterministic.

use tracing::debug;

use crate::query::{detect_intents, extract_key_terms};
use crate::scoring::relevance_score;
use crate::types::{Intent, Listing, ScoredListing};

/// Rank a listing catalog against a free-text query.
///
/// Returns borrowed listings, best match first. Zero-scoring listings are
/// dropped; on the identity branches the full catalog comes back in its
/// original order. Never mutates or errors.
pub fn search<'a>(listings: &'a [Listing], query: &str) -> Vec<&'a Listing> {
    search_with_scores(listings, query)
        .into_iter()
        .map(|entry| entry.listing)
        .collect()
}

/// Like [`search`], but keeps the per-listing scores for display and
/// diagnostics.
///
/// On the identity branches every listing comes back with score 0 in
/// catalog order - the scores are meaningless there because nothing was
/// scored, but callers still get the full sequence to display.
pub fn search_with_scores<'a>(listings: &'a [Listing], query: &str) -> Vec<ScoredListing<'a>> {
    debug!(query, candidates = listings.len(), "listing search");

    if query.trim().is_empty() {
        return unscored(listings);
    }

    let key_terms = extract_key_terms(query);
    let intents = detect_intents(query);

    if key_terms.is_empty() && intents.is_empty() {
        debug!("no meaningful terms or intents; returning catalog unchanged");
        return unscored(listings);
    }

    let mut scored = score_all(listings, &key_terms, &intents);
    // Stable sort: equal scores keep catalog order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.retain(|entry| entry.score > 0);

    debug!(relevant = scored.len(), "ranked listings");
    scored
}

fn unscored(listings: &[Listing]) -> Vec<ScoredListing<'_>> {
    listings
        .iter()
        .map(|listing| ScoredListing { listing, score: 0 })
        .collect()
}

/// Score every candidate with the query's terms and intents.
///
/// The parallel path collects in catalog order before the sort, so both
/// paths produce bit-identical output.
#[cfg(feature = "parallel")]
fn score_all<'a>(
    listings: &'a [Listing],
    key_terms: &[String],
    intents: &[Intent],
) -> Vec<ScoredListing<'a>> {
    use rayon::prelude::*;

    listings
        .par_iter()
        .map(|listing| ScoredListing {
            listing,
            score: relevance_score(listing, key_terms, intents),
        })
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn score_all<'a>(
    listings: &'a [Listing],
    key_terms: &[String],
    intents: &[Intent],
) -> Vec<ScoredListing<'a>> {
    listings
        .iter()
        .map(|listing| ScoredListing {
            listing,
            score: relevance_score(listing, key_terms, intents),
        })
        .collect()
}
