// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Structured catalog filters: industry, age bracket, revenue band, keyword.
//!
//! These are the browse-page dropdowns, as opposed to the free-text search.
//! They compose conjunctively, preserve catalog order, and never error -
//! a listing that lacks a field simply fails to match filters on that
//! field. Filters are typically applied to the output of
//! [`crate::search`], narrowing an already-ranked sequence.

use serde::{Deserialize, Serialize};

use crate::types::Listing;
use crate::utils::parse_amount_digits;

/// ARR band over the digits extracted from a listing's `arr` field.
///
/// Bracket bounds mirror the browse-page dropdown. A listing whose `arr`
/// contains no parseable digits matches no band at all - undisclosed
/// revenue never satisfies a revenue filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RevenueBand {
    /// Up to $50K ARR.
    UpTo50K,
    /// $50K to $250K ARR.
    From50KTo250K,
    /// $250K to $1M ARR.
    From250KTo1M,
    /// Above $1M ARR.
    Over1M,
}

impl RevenueBand {
    /// Whether a digit amount falls inside this band. Bounds are inclusive
    /// at the top of each band, matching the dropdown labels.
    pub fn contains_amount(self, amount: u64) -> bool {
        match self {
            RevenueBand::UpTo50K => amount <= 50_000,
            RevenueBand::From50KTo250K => amount > 50_000 && amount <= 250_000,
            RevenueBand::From250KTo1M => amount > 250_000 && amount <= 1_000_000,
            RevenueBand::Over1M => amount > 1_000_000,
        }
    }

    /// Whether a listing's disclosed ARR falls inside this band.
    pub fn matches(self, listing: &Listing) -> bool {
        listing
            .arr
            .as_deref()
            .and_then(parse_amount_digits)
            .is_some_and(|amount| self.contains_amount(amount))
    }

    /// The dropdown label the web tier displays for this band.
    pub fn label(self) -> &'static str {
        match self {
            RevenueBand::UpTo50K => "$0-50K ARR",
            RevenueBand::From50KTo250K => "$50-250K ARR",
            RevenueBand::From250KTo1M => "$250K-1M ARR",
            RevenueBand::Over1M => "$1M+ ARR",
        }
    }
}

impl std::str::FromStr for RevenueBand {
    type Err = String;

    /// Accepts the short CLI spellings ("0-50k", "50-250k", "250k-1m",
    /// "1m+") as well as the full dropdown labels.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "0-50k" | "$0-50k arr" => Ok(RevenueBand::UpTo50K),
            "50-250k" | "$50-250k arr" => Ok(RevenueBand::From50KTo250K),
            "250k-1m" | "$250k-1m arr" => Ok(RevenueBand::From250KTo1M),
            "1m+" | "$1m+ arr" => Ok(RevenueBand::Over1M),
            other => Err(format!(
                "unknown revenue band '{other}' (expected 0-50k, 50-250k, 250k-1m, or 1m+)"
            )),
        }
    }
}

/// Conjunctive filter set applied to a listing sequence.
///
/// `None` on a field means "no constraint" - the dropdowns' "All
/// Industries" / "Any Age" / "Any Revenue" sentinels map to `None` at the
/// boundary.
#[derive(Debug, Clone, Default)]
pub struct ListingFilters {
    /// Exact industry label ("SaaS", "E-commerce", ...).
    pub industry: Option<String>,
    /// Exact age bracket label ("3-5 years", ...).
    pub age: Option<String>,
    /// ARR band.
    pub revenue: Option<RevenueBand>,
    /// Case-insensitive substring across headline, description, industry,
    /// and features - the quick-search box.
    pub keyword: Option<String>,
}

impl ListingFilters {
    /// True when no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.industry.is_none()
            && self.age.is_none()
            && self.revenue.is_none()
            && self.keyword.is_none()
    }

    /// Whether a single listing satisfies every set constraint.
    pub fn matches(&self, listing: &Listing) -> bool {
        if let Some(industry) = &self.industry {
            if listing.industry != *industry {
                return false;
            }
        }
        if let Some(age) = &self.age {
            if listing.age.as_deref() != Some(age.as_str()) {
                return false;
            }
        }
        if let Some(band) = self.revenue {
            if !band.matches(listing) {
                return false;
            }
        }
        if let Some(keyword) = &self.keyword {
            if !keyword_match(listing, keyword) {
                return false;
            }
        }
        true
    }

    /// Filter a listing sequence, preserving its order.
    pub fn apply<'a, I>(&self, listings: I) -> Vec<&'a Listing>
    where
        I: IntoIterator<Item = &'a Listing>,
    {
        listings
            .into_iter()
            .filter(|listing| self.matches(listing))
            .collect()
    }
}

fn keyword_match(listing: &Listing, keyword: &str) -> bool {
    let needle = keyword.to_lowercase();
    listing.title().to_lowercase().contains(&needle)
        || listing.description.to_lowercase().contains(&needle)
        || listing.industry.to_lowercase().contains(&needle)
        || listing.features.to_lowercase().contains(&needle)
}
