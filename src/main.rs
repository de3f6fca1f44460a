// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command-line front end for the listing search engine.
//!
//! Reads a catalog exported by the web tier (a JSON array of listings),
//! ranks it against a query, optionally narrows with the browse-page
//! filters, and prints a table or JSON. The `inspect` subcommand shows what
//! the analyzer extracted from a query without needing a catalog.

use std::fs;
use std::io::Read;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use phoenix_search::{
    detect_intents, extract_key_terms, search_explanation, search_with_scores, Listing,
    ListingFilters, ScoredListing,
};

mod cli;
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Search {
            listings,
            query,
            industry,
            age,
            revenue,
            json,
        } => {
            let filters = ListingFilters {
                industry,
                age,
                revenue,
                keyword: None,
            };
            run_search(&listings, &query, &filters, json)
        }
        Commands::Inspect { query } => {
            run_inspect(&query);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => "warn",
        1 => "info,phoenix_search=debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .with_writer(std::io::stderr)
        .init();
}

fn run_search(path: &str, query: &str, filters: &ListingFilters, json: bool) -> Result<(), String> {
    let catalog = load_catalog(path)?;
    let ranked: Vec<ScoredListing> = search_with_scores(&catalog, query)
        .into_iter()
        .filter(|entry| filters.matches(entry.listing))
        .collect();
    let results: Vec<&Listing> = ranked.iter().map(|entry| entry.listing).collect();
    let explanation = search_explanation(query, &results);

    if json {
        let payload = serde_json::json!({
            "explanation": explanation,
            "results": ranked
                .iter()
                .map(|entry| serde_json::json!({
                    "score": entry.score,
                    "listing": entry.listing,
                }))
                .collect::<Vec<_>>(),
        });
        let rendered = serde_json::to_string_pretty(&payload)
            .map_err(|e| format!("failed to serialize results: {}", e))?;
        println!("{}", rendered);
        return Ok(());
    }

    if ranked.is_empty() {
        println!("No listings matched.");
        return Ok(());
    }

    println!(
        "{:<4} {:>5}  {:<40} {:<14} {}",
        "#", "score", "listing", "industry", "arr"
    );
    for (rank, entry) in ranked.iter().enumerate() {
        println!(
            "{:<4} {:>5}  {:<40} {:<14} {}",
            rank + 1,
            entry.score,
            truncate(entry.listing.title(), 40),
            entry.listing.industry,
            entry.listing.arr.as_deref().unwrap_or("-"),
        );
    }
    if !explanation.is_empty() {
        println!("\n{}", explanation);
    }
    Ok(())
}

fn run_inspect(query: &str) {
    let terms = extract_key_terms(query);
    let intents = detect_intents(query);

    println!("query:   {:?}", query);
    println!("terms:   {}", format_list(&terms));
    println!(
        "intents: {}",
        format_list(
            &intents
                .iter()
                .map(|intent| intent.as_str().to_string())
                .collect::<Vec<_>>()
        )
    );
}

fn format_list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}

fn load_catalog(path: &str) -> Result<Vec<Listing>, String> {
    let raw = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("failed to read stdin: {}", e))?;
        buf
    } else {
        fs::read_to_string(path).map_err(|e| format!("failed to read {}: {}", path, e))?
    };
    serde_json::from_str(&raw).map_err(|e| format!("invalid listings JSON: {}", e))
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max.saturating_sub(1)).collect();
        out.push('…');
        out
    }
}
