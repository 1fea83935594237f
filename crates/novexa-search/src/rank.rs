//! Catalog ranking.
//!
//! Ranking never fails and never returns a blank page when the catalog has
//! products: a query with no lexical signal falls back to the caller's own
//! ordering (usually newest first).

use serde::{Deserialize, Serialize};

use novexa_core::Product;

use crate::query::Query;
use crate::score::score;
use crate::weights::Weights;

/// Default and maximum number of products returned by a ranking call.
pub const MAX_RESULTS: usize = 20;

/// Tunables for a [`Ranker`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankOptions {
    /// Result cap, at most [`MAX_RESULTS`]. 0 means [`MAX_RESULTS`].
    pub limit: usize,
    pub weights: Weights,
}

impl Default for RankOptions {
    fn default() -> Self {
        Self {
            limit: MAX_RESULTS,
            weights: Weights::default(),
        }
    }
}

impl RankOptions {
    fn effective_limit(&self) -> usize {
        if self.limit == 0 {
            MAX_RESULTS
        } else {
            self.limit.min(MAX_RESULTS)
        }
    }
}

/// A product paired with its relevance score for one ranking call.
///
/// Products returned through a fallback path carry a score of 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored<'a> {
    pub product: &'a Product,
    pub score: u32,
}

#[derive(Debug, Clone, Default)]
pub struct Ranker {
    options: RankOptions,
}

impl Ranker {
    #[must_use]
    pub fn new(options: RankOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RankOptions {
        &self.options
    }

    /// Rank `catalog` against `query`, returning owned copies of at most
    /// `limit` products in relevance order.
    pub fn rank(&self, catalog: &[Product], query: &str) -> Vec<Product> {
        self.rank_scored(catalog, query)
            .into_iter()
            .map(|s| s.product.clone())
            .collect()
    }

    /// Rank `catalog` against `query`, keeping the scores.
    ///
    /// - An empty query returns the first `limit` products in input order.
    /// - Otherwise products are sorted by descending score; equal scores keep
    ///   their input order.
    /// - If nothing scores above 0 the first `limit` products are returned in
    ///   input order; otherwise zero-score products are dropped.
    pub fn rank_scored<'a>(&self, catalog: &'a [Product], query: &str) -> Vec<Scored<'a>> {
        let limit = self.options.effective_limit();
        let query = Query::parse(query);

        if query.is_empty() {
            log::debug!("Empty query, returning first {} of {} products", limit, catalog.len());
            return fallback(catalog, limit);
        }

        let mut scored: Vec<Scored<'a>> = catalog
            .iter()
            .map(|product| Scored {
                product,
                score: score(product, &query, &self.options.weights),
            })
            .collect();

        // sort_by is stable, which keeps input order among ties
        scored.sort_by(|a, b| b.score.cmp(&a.score));

        if scored.first().is_some_and(|top| top.score == 0) {
            log::debug!(
                "No lexical signal for {:?} across {} products, using fallback order",
                query.phrase(),
                catalog.len()
            );
            return fallback(catalog, limit);
        }

        scored.retain(|s| s.score > 0);
        log::debug!(
            "Ranked {:?} ({} tokens): {} of {} products matched, returning up to {}",
            query.phrase(),
            query.matchers().len(),
            scored.len(),
            catalog.len(),
            limit
        );
        scored.truncate(limit);
        scored
    }
}

fn fallback(catalog: &[Product], limit: usize) -> Vec<Scored<'_>> {
    catalog
        .iter()
        .take(limit)
        .map(|product| Scored { product, score: 0 })
        .collect()
}

/// Rank a catalog snapshot with the default weights and result cap.
pub fn rank(catalog: &[Product], query: &str) -> Vec<Product> {
    Ranker::default().rank(catalog, query)
}
