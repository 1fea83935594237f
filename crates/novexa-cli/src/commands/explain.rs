use anyhow::{Context, Result};
use novexa_search::{explain, Query, Ranker, ScoreBreakdown};
use serde::Serialize;

use crate::config::Config;

#[derive(Debug, Serialize)]
struct ExplainRow<'a> {
    id: &'a str,
    name: &'a str,
    score: u32,
    breakdown: ScoreBreakdown,
}

/// Print the per-signal score breakdown for each ranked product.
pub fn run_explain(config: &Config, query: &str, json: bool) -> Result<()> {
    let catalog = super::load_catalog(config)?;
    let ranker = Ranker::new(config.ranking.clone());
    let parsed = Query::parse(query);

    let rows: Vec<ExplainRow<'_>> = ranker
        .rank_scored(catalog.products(), query)
        .into_iter()
        .map(|s| ExplainRow {
            id: s.product.id.as_str(),
            name: &s.product.name,
            score: s.score,
            breakdown: explain(s.product, &parsed, &ranker.options().weights),
        })
        .collect();

    if json {
        let json = serde_json::to_string_pretty(&rows).context("Failed to encode breakdowns")?;
        println!("{json}");
        return Ok(());
    }

    println!("\nQuery: {:?}", parsed.phrase());
    println!("Tokens: {:?}\n", parsed.tokens().collect::<Vec<_>>());

    if rows.iter().all(|r| r.score == 0) {
        println!("No product matched; showing the catalog's own order.\n");
    }

    for row in &rows {
        println!("{:>4}  {} [{}]", row.score, row.name, row.id);
        for (signal, points) in row.breakdown.signals() {
            println!("        +{points:<3} {signal}");
        }
    }

    Ok(())
}
