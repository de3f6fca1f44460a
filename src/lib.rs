//! Natural-language search and ranking for a marketplace product catalog.
//!
//! Turns a free-text buyer query ("profitable SaaS business with good
//! revenue") into a ranked subset of listings, plus a one-line explanation
//! of what matched. The engine is deterministic and rule-based: keyword
//! extraction, heuristic intent detection, and weighted scoring. No ML, no
//! hidden state, no I/O - identical inputs always produce identical output.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   query.rs   │────▶│  scoring.rs  │────▶│  search.rs   │
//! │ (key terms,  │     │ (relevance_  │     │ (search,     │
//! │  intents)    │     │  score)      │     │  ranking)    │
//! └──────────────┘     └──────────────┘     └──────────────┘
//!        │                                         │
//!        ▼                                         ▼
//! ┌──────────────┐                          ┌──────────────┐
//! │  explain.rs  │                          │  filter.rs   │
//! │ (result      │                          │ (browse-page │
//! │  summaries)  │                          │  filters)    │
//! └──────────────┘                          └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use phoenix_search::{search, search_explanation, Listing};
//!
//! let catalog: Vec<Listing> = Vec::new();
//! let results = search(&catalog, "profitable saas with recurring revenue");
//! let summary = search_explanation("profitable saas with recurring revenue", &results);
//! assert!(results.is_empty());
//! assert!(summary.is_empty());
//! ```
//!
//! The caller owns the catalog; the engine borrows it per call and never
//! mutates it. Any timeout/debounce behavior around searches belongs to the
//! caller - each invocation here is synchronous, pure computation.

// Module declarations
mod explain;
mod filter;
mod query;
mod scoring;
mod search;
mod types;
mod utils;

// Re-exports for public API
pub use explain::search_explanation;
pub use filter::{ListingFilters, RevenueBand};
pub use query::{detect_intents, extract_key_terms};
pub use scoring::{
    relevance_score, ESTABLISHED_AGE_BONUS, GROWTH_BONUS, HIGH_REVENUE_BONUS,
    HIGH_REVENUE_THRESHOLD, REVENUE_BONUS, SUBSTRING_BONUS, USERS_BONUS, WHOLE_WORD_WEIGHT,
};
pub use search::{search, search_with_scores};
pub use types::{Intent, Listing, ScoredListing};
pub use utils::{normalize_query, parse_amount_digits};
