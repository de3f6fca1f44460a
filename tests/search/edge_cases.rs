//! Degenerate inputs: empty catalogs, missing fields, filler queries.

use phoenix_search::{search, search_explanation, Listing};

use super::common::{ids, listing, sample_catalog};

#[test]
fn empty_catalog_yields_empty_results_for_any_query() {
    let catalog: Vec<Listing> = Vec::new();
    assert!(search(&catalog, "").is_empty());
    assert!(search(&catalog, "profitable saas").is_empty());
}

#[test]
fn explanation_is_empty_for_empty_query_or_results() {
    let catalog = sample_catalog();
    let results = search(&catalog, "saas");
    assert!(!results.is_empty());

    assert_eq!(search_explanation("", &results), "");
    assert_eq!(search_explanation("profitable saas", &[]), "");
}

#[test]
fn filler_query_passes_the_catalog_through() {
    // Stop words and two-character tokens only: no key terms, no intents.
    let catalog = sample_catalog();
    assert_eq!(ids(&search(&catalog, "show me the")), [1, 2, 3, 4]);
    assert_eq!(ids(&search(&catalog, "to be or")), [1, 2, 3, 4]);
}

#[test]
fn punctuation_only_query_passes_the_catalog_through() {
    // "!!!" normalizes to nothing at all.
    let catalog = sample_catalog();
    assert_eq!(ids(&search(&catalog, "!!! ... ###")), [1, 2, 3, 4]);
}

#[test]
fn intent_query_against_bare_listings_never_panics() {
    // Every optional field absent: intent bonuses all evaluate to zero and
    // the listing simply drops out of intent-only queries.
    let catalog = vec![listing(1, "Bare", "minimal listing", "SaaS", "")];

    assert!(search(&catalog, "established business with revenue and users").is_empty());
}

#[test]
fn empty_optional_strings_behave_like_absent_fields() {
    let mut l = listing(1, "EmptyStrings", "minimal listing", "SaaS", "");
    l.arr = Some("".to_string());
    l.total_users = Some("".to_string());
    l.growth_opportunities = Some("".to_string());
    let catalog = vec![l];

    // "business" and "revenue"/"users" terms match nothing; the empty-string
    // fields must not grant intent bonuses.
    assert!(search(&catalog, "business with revenue and users").is_empty());
}

#[test]
fn unicode_queries_are_handled_without_panic() {
    let catalog = sample_catalog();
    let _ = search(&catalog, "café naïve 東京");
    let _ = search(&catalog, "ünïcödé everywhere");
}

#[test]
fn explanation_for_filler_query_reports_showing_all() {
    let catalog = sample_catalog();
    let results = search(&catalog, "show me the");
    assert_eq!(results.len(), catalog.len());
    assert_eq!(
        search_explanation("show me the", &results),
        "Showing all available products."
    );
}
