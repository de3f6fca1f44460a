// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance scoring for listings.
//!
//! A listing's score against one query is the sum of textual match weight
//! and intent-specific bonuses:
//!
//! ```text
//! score = Σ per key term   (2 × whole-word matches + 1 if substring hit)
//!       + Σ per intent     (bonus when the listing qualifies)
//! ```
//!
//! # Weights
//!
//! | Signal                               | Points |
//! |--------------------------------------|--------|
//! | Whole-word term match (per match)    | 2      |
//! | Substring term hit (flat, per term)  | 1      |
//! | Revenue intent, ARR present          | 3      |
//! | Revenue intent, high ARR             | +2     |
//! | Growth intent, growth narrative      | 3      |
//! | Age intent, established bracket      | 2      |
//! | Users intent, user counts present    | 3      |
//! | Industry intent                      | 0      |
//!
//! Whole-word matches dominate: repeated exact occurrences scale linearly
//! while the substring bonus stays flat, so a listing that actually talks
//! about "fintech" outranks one where the term only appears inside a longer
//! word. Industry carries no direct bonus - industry vocabulary already
//! scores through the composite text.

use regex::Regex;
use tracing::trace;

use crate::types::{Intent, Listing};
use crate::utils::parse_amount_digits;

/// Points per whole-word occurrence of a key term.
pub const WHOLE_WORD_WEIGHT: u32 = 2;
/// Flat bonus when a key term occurs anywhere as a substring.
pub const SUBSTRING_BONUS: u32 = 1;
/// Bonus for a non-empty ARR field when the revenue intent fires.
pub const REVENUE_BONUS: u32 = 3;
/// Extra bonus for ARR above the threshold or containing "million".
pub const HIGH_REVENUE_BONUS: u32 = 2;
/// Digit threshold for the high-revenue bonus.
pub const HIGH_REVENUE_THRESHOLD: u64 = 500;
/// Bonus for a growth narrative when the growth intent fires.
pub const GROWTH_BONUS: u32 = 3;
/// Bonus for an established age bracket when the age intent fires.
pub const ESTABLISHED_AGE_BONUS: u32 = 2;
/// Bonus for present user counts when the users intent fires.
pub const USERS_BONUS: u32 = 3;

/// Compute the relevance score of a listing for one query.
///
/// `key_terms` and `intents` come from [`crate::extract_key_terms`] and
/// [`crate::detect_intents`]; the orchestrator runs both once per query and
/// scores every candidate with the same inputs. Pure and deterministic;
/// malformed or missing listing fields contribute zero, never an error.
pub fn relevance_score(listing: &Listing, key_terms: &[String], intents: &[Intent]) -> u32 {
    let text = listing.composite_text();
    let mut score = 0u32;

    for term in key_terms {
        score += WHOLE_WORD_WEIGHT * whole_word_matches(&text, term);
        if text.contains(term.as_str()) {
            score += SUBSTRING_BONUS;
        }
    }

    for intent in intents {
        score += intent_bonus(listing, *intent);
    }

    trace!(listing = listing.id, score, "scored listing");
    score
}

/// Count whole-word occurrences of `term` in `text`.
///
/// Terms are already lower-cased and punctuation-free, so the escaped
/// pattern is a plain word wrapped in boundary assertions.
fn whole_word_matches(text: &str, term: &str) -> u32 {
    let pattern = format!(r"\b{}\b", regex::escape(term));
    match Regex::new(&pattern) {
        Ok(re) => re.find_iter(text).count() as u32,
        Err(_) => 0,
    }
}

fn intent_bonus(listing: &Listing, intent: Intent) -> u32 {
    match intent {
        Intent::Revenue => revenue_bonus(listing),
        Intent::Growth => growth_bonus(listing),
        Intent::Age => age_bonus(listing),
        Intent::Users => users_bonus(listing),
        // Industry matching rides entirely on key-term overlap in the
        // composite text.
        Intent::Industry => 0,
    }
}

/// Revenue-minded buyers: reward any disclosed ARR, and reward large ARR
/// more. "Large" means the extracted digits exceed the threshold, or the
/// text says "million" outright (lowercase - see `parse_amount_digits` for
/// why the digits alone can't be trusted there).
fn revenue_bonus(listing: &Listing) -> u32 {
    let Some(arr) = non_empty(&listing.arr) else {
        return 0;
    };
    let mut bonus = REVENUE_BONUS;
    let large = arr.contains("million")
        || parse_amount_digits(arr).is_some_and(|amount| amount > HIGH_REVENUE_THRESHOLD);
    if large {
        bonus += HIGH_REVENUE_BONUS;
    }
    bonus
}

fn growth_bonus(listing: &Listing) -> u32 {
    let Some(narrative) = non_empty(&listing.growth_opportunities) else {
        return 0;
    };
    let lower = narrative.to_lowercase();
    if lower.contains("growth") || lower.contains("expanding") || lower.contains("scale") {
        GROWTH_BONUS
    } else {
        0
    }
}

/// Age-minded buyers get steered toward established businesses: the bonus
/// goes to listings whose age bracket reads "5+ years". The questionnaire's
/// brackets top out there, so "5+" is the only marker of a mature listing.
fn age_bonus(listing: &Listing) -> u32 {
    match non_empty(&listing.age) {
        Some(age) if age.contains("5+") => ESTABLISHED_AGE_BONUS,
        _ => 0,
    }
}

fn users_bonus(listing: &Listing) -> u32 {
    if non_empty(&listing.total_users).is_some() || non_empty(&listing.active_users).is_some() {
        USERS_BONUS
    } else {
        0
    }
}

/// Sellers sometimes submit empty strings for skipped fields; treat those
/// exactly like absent values.
fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
