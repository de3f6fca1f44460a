// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data model the search engine operates on.
//!
//! `Listing` mirrors the seller questionnaire: a handful of required fields
//! (name, description, industry, features) and a long tail of optional
//! free-text descriptors. Field renames are camelCase so catalogs exported by
//! the web tier (`techStack`, `growthOpportunities`, `totalUsers`, ...)
//! deserialize without a mapping layer.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - The engine never mutates a `Listing`. Every search returns a new
//!   ordering over borrowed entries; scores are derived per call and never
//!   stored on the listing.
//! - Optional descriptors are free text typed by sellers. Treat an empty
//!   string exactly like an absent field - the web tier has historically
//!   round-tripped both.
//! - `Intent::ALL` is the detection iteration order AND the order intents
//!   appear in explanation sentences. Reordering it changes observable
//!   output.

use serde::{Deserialize, Serialize};

/// A single product listing in the marketplace catalog.
///
/// Consumed read-only; the search engine ranks listings but never edits them.
/// The required fields are what every questionnaire submission carries. The
/// optional ones are the "additional information" page, and sellers skip
/// them often enough that every consumer must tolerate their absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub seller_id: u64,
    /// Product name from the questionnaire.
    pub name: String,
    /// Marketing headline shown on listing cards. Older listings predate the
    /// field; display and search fall back to `name`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headline: Option<String>,
    /// Long-form pitch text.
    pub description: String,
    /// Category label, e.g. "SaaS", "E-commerce", "Marketplace".
    pub industry: String,
    /// Comma- or free-text list of feature phrases.
    pub features: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// "B2B", "B2C", or "Both".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub launch_year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<String>,
    /// Narrative on where the business could go next.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub growth_opportunities: Option<String>,
    /// Age bracket label: "Less than 1 year", "1-2 years", "3-5 years",
    /// or "5+ years".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    /// Annual recurring revenue as typed by the seller, e.g. "$250,000"
    /// or "$1.2 million". Free text, not a number.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_users: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_users: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_clients: Option<String>,
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

impl Listing {
    /// Title shown in ranked output: the headline when present, else the
    /// product name.
    pub fn title(&self) -> &str {
        match self.headline.as_deref() {
            Some(headline) if !headline.is_empty() => headline,
            _ => &self.name,
        }
    }

    /// The lower-cased concatenation of the listing's searchable text fields:
    /// title, description, industry, features, tech stack, and growth
    /// opportunities. Absent optional fields contribute nothing.
    ///
    /// This is the corpus every key term is matched against.
    pub fn composite_text(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.title(),
            self.description,
            self.industry,
            self.features,
            self.tech_stack.as_deref().unwrap_or(""),
            self.growth_opportunities.as_deref().unwrap_or(""),
        )
        .to_lowercase()
    }
}

/// A search priority inferred from the query phrasing.
///
/// Closed set. Detection is many-to-many: a query can trigger zero, one, or
/// several intents ("profitable saas with lots of users" fires revenue,
/// industry, and users at once).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intent {
    Revenue,
    Growth,
    Age,
    Users,
    Industry,
}

impl Intent {
    /// Fixed category iteration order. Detection checks categories in this
    /// order and explanation sentences list them in this order, so results
    /// are reproducible run to run.
    pub const ALL: [Intent; 5] = [
        Intent::Revenue,
        Intent::Growth,
        Intent::Age,
        Intent::Users,
        Intent::Industry,
    ];

    /// Lowercase identifier, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Revenue => "revenue",
            Intent::Growth => "growth",
            Intent::Age => "age",
            Intent::Users => "users",
            Intent::Industry => "industry",
        }
    }

    /// Display label used in explanation sentences.
    pub fn display_label(self) -> &'static str {
        match self {
            Intent::Revenue => "revenue performance",
            Intent::Growth => "growth potential",
            Intent::Age => "business age",
            Intent::Users => "user base",
            Intent::Industry => "industry sector",
        }
    }
}

/// A listing paired with its relevance score for one query.
///
/// Transient: lives only within a single search invocation and is never
/// persisted. Scores are comparable within one query, not across queries.
#[derive(Debug, Clone)]
pub struct ScoredListing<'a> {
    pub listing: &'a Listing,
    pub score: u32,
}
