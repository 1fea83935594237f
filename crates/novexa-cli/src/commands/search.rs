use anyhow::{Context, Result};
use novexa_search::{rerank_or_fallback, Ranker, Recommendation, ResponseFileReranker};
use std::path::PathBuf;

use crate::config::Config;

#[derive(Debug)]
pub struct SearchArgs {
    pub query: String,
    pub limit: Option<usize>,
    pub json: bool,
    pub rerank_response: Option<PathBuf>,
    pub recommended_only: bool,
}

/// Rank the catalog against a query and print the results.
pub fn run_search(config: &Config, args: &SearchArgs) -> Result<()> {
    let catalog = super::load_catalog(config)?;

    let mut options = config.ranking.clone();
    if let Some(limit) = args.limit {
        options.limit = limit;
    }
    log::debug!(
        "Searching {} products for {:?} (limit {})",
        catalog.len(),
        args.query,
        options.limit
    );
    let ranked = Ranker::new(options).rank(catalog.products(), &args.query);

    let mut results = match &args.rerank_response {
        Some(path) => {
            let reranker = ResponseFileReranker::new(path);
            rerank_or_fallback(&reranker, &args.query, ranked)
        }
        None => ranked
            .into_iter()
            .map(|product| Recommendation {
                product,
                recommended: false,
            })
            .collect(),
    };

    if args.recommended_only {
        results.retain(|r| r.recommended);
    }

    if args.json {
        let json = serde_json::to_string_pretty(&results).context("Failed to encode results")?;
        println!("{json}");
        return Ok(());
    }

    print_table(&args.query, catalog.len(), &results);
    Ok(())
}

fn print_table(query: &str, catalog_size: usize, results: &[Recommendation]) {
    if query.trim().is_empty() {
        println!("\n🔎 Latest products ({} in catalog)\n", catalog_size);
    } else {
        println!("\n🔎 Results for \"{}\" ({} in catalog)\n", query.trim(), catalog_size);
    }

    if results.is_empty() {
        println!("  No products.");
        return;
    }

    for (rank, r) in results.iter().enumerate() {
        let p = &r.product;
        let marker = if r.recommended { "★" } else { " " };
        println!(
            "{marker} {:>2}. {:<28} {:<10} {:<8} {:<12} {:>8.2}  [{}]",
            rank + 1,
            p.name,
            p.color,
            p.gender,
            p.category,
            p.price,
            p.id
        );
    }
}
