//! Browse-page filters composed with natural-language search results.

use phoenix_search::{search, ListingFilters, RevenueBand};

use super::common::{ids, sample_catalog};

#[test]
fn industry_filter_narrows_search_results() {
    let catalog = sample_catalog();
    let results = search(&catalog, "marketplace");

    let education = ListingFilters {
        industry: Some("Education".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&education.apply(results.clone())), [4]);

    let saas = ListingFilters {
        industry: Some("SaaS".to_string()),
        ..Default::default()
    };
    assert!(saas.apply(results).is_empty());
}

#[test]
fn age_filter_keeps_only_the_exact_bracket() {
    let catalog = sample_catalog();
    let established = ListingFilters {
        age: Some("5+ years".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&established.apply(&catalog)), [3]);
}

#[test]
fn revenue_band_filter_uses_extracted_digits() {
    let catalog = sample_catalog();

    let mid = ListingFilters {
        revenue: Some(RevenueBand::From50KTo250K),
        ..Default::default()
    };
    assert_eq!(ids(&mid.apply(&catalog)), [1]);
}

#[test]
fn million_valued_arr_collapses_into_the_bottom_band() {
    // "$1.2 million" strips to 12, so the band filter files it under
    // "up to $50K" alongside the genuinely small listings. Same digit
    // extraction the scorer uses.
    let catalog = sample_catalog();
    let bottom = ListingFilters {
        revenue: Some(RevenueBand::UpTo50K),
        ..Default::default()
    };
    assert_eq!(ids(&bottom.apply(&catalog)), [2, 3]);
}

#[test]
fn keyword_filter_does_substring_matching() {
    let catalog = sample_catalog();
    let filters = ListingFilters {
        keyword: Some("newsletter".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filters.apply(&catalog)), [3]);
}

#[test]
fn combined_filters_are_conjunctive() {
    let catalog = sample_catalog();
    let filters = ListingFilters {
        industry: Some("Content".to_string()),
        age: Some("5+ years".to_string()),
        ..Default::default()
    };
    assert_eq!(ids(&filters.apply(&catalog)), [3]);

    let contradictory = ListingFilters {
        industry: Some("Content".to_string()),
        age: Some("1-2 years".to_string()),
        ..Default::default()
    };
    assert!(contradictory.apply(&catalog).is_empty());
}
