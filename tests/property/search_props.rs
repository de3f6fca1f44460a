//! Whole-pipeline properties over randomized catalogs and queries.

use proptest::prelude::*;

use phoenix_search::{
    detect_intents, extract_key_terms, relevance_score, search, search_with_scores, Listing,
};

use super::common::listing;

const INDUSTRIES: &[&str] = &["SaaS", "E-commerce", "Content", "Education", "Gaming"];
const ARR_SAMPLES: &[&str] = &["$400", "$40,000", "$250,000", "$1.2 million"];
const AGE_SAMPLES: &[&str] = &["Less than 1 year", "1-2 years", "3-5 years", "5+ years"];

fn word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{3,7}").unwrap()
}

fn listing_strategy(id: u64) -> impl Strategy<Value = Listing> {
    (
        prop::collection::vec(word_strategy(), 1..6),
        prop::sample::select(INDUSTRIES.to_vec()),
        prop::option::of(prop::sample::select(ARR_SAMPLES.to_vec())),
        prop::option::of(prop::sample::select(AGE_SAMPLES.to_vec())),
        prop::option::of(Just("4,200".to_string())),
    )
        .prop_map(move |(words, industry, arr, age, users)| {
            let mut l = listing(id, "venture", &words.join(" "), industry, "");
            l.arr = arr.map(str::to_string);
            l.age = age.map(str::to_string);
            l.total_users = users;
            l
        })
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Listing>> {
    (1usize..6).prop_flat_map(|len| {
        (1..=len)
            .map(|i| listing_strategy(i as u64))
            .collect::<Vec<_>>()
    })
}

fn query_strategy() -> impl Strategy<Value = String> {
    let phrase = prop::sample::select(vec![
        "".to_string(),
        "profitable".to_string(),
        "growing".to_string(),
        "established".to_string(),
        "users".to_string(),
        "saas".to_string(),
    ]);
    (prop::collection::vec(word_strategy(), 0..4), phrase)
        .prop_map(|(words, phrase)| format!("{} {}", words.join(" "), phrase))
}

proptest! {
    /// Search output is always a subset of the input, in input-id terms.
    #[test]
    fn results_are_a_subset_of_the_catalog(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let input_ids: Vec<u64> = catalog.iter().map(|l| l.id).collect();
        for result in search(&catalog, &query) {
            prop_assert!(input_ids.contains(&result.id));
        }
    }

    /// Adjacent results never increase in score.
    #[test]
    fn scores_are_non_increasing(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let scored = search_with_scores(&catalog, &query);
        for pair in scored.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    /// On the scored branch, every returned listing re-scores positive with
    /// the same analysis inputs.
    #[test]
    fn returned_listings_rescore_positive(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let key_terms = extract_key_terms(&query);
        let intents = detect_intents(&query);
        prop_assume!(!key_terms.is_empty() || !intents.is_empty());

        for result in search(&catalog, &query) {
            prop_assert!(relevance_score(result, &key_terms, &intents) > 0);
        }
    }

    /// Blank queries are the identity on any catalog.
    #[test]
    fn blank_queries_are_identity(catalog in catalog_strategy()) {
        let expected: Vec<u64> = catalog.iter().map(|l| l.id).collect();
        for blank in ["", " ", "   ", "\t"] {
            let got: Vec<u64> = search(&catalog, blank).iter().map(|l| l.id).collect();
            prop_assert_eq!(&got, &expected);
        }
    }

    /// The pipeline is deterministic end to end.
    #[test]
    fn search_is_deterministic(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let first: Vec<u64> = search(&catalog, &query).iter().map(|l| l.id).collect();
        let second: Vec<u64> = search(&catalog, &query).iter().map(|l| l.id).collect();
        prop_assert_eq!(first, second);
    }

    /// `search` is exactly `search_with_scores` with the scores dropped.
    #[test]
    fn score_variant_agrees_with_plain_search(
        catalog in catalog_strategy(),
        query in query_strategy(),
    ) {
        let plain: Vec<u64> = search(&catalog, &query).iter().map(|l| l.id).collect();
        let scored: Vec<u64> = search_with_scores(&catalog, &query)
            .iter()
            .map(|entry| entry.listing.id)
            .collect();
        prop_assert_eq!(plain, scored);
    }
}
