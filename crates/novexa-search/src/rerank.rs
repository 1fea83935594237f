//! Contract for an optional external reranker.
//!
//! A reranker (typically a generative model) receives the engine's ranked
//! candidates and answers with an ordering of their ids plus the subset it
//! recommends. Its answer is untrusted: unknown ids and repeats are ignored,
//! candidates it forgets are appended in engine order, and any failure falls
//! back to the engine's ordering verbatim.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use novexa_core::Product;

/// Errors from an external reranker.
#[derive(Debug, Error)]
pub enum RerankError {
    /// The reranker answered with something that is not a valid response.
    #[error("malformed rerank response: {0}")]
    Malformed(#[from] serde_json::Error),

    /// The response could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The reranker is not configured or did not answer in time.
    #[error("reranker unavailable: {0}")]
    Unavailable(String),
}

/// A reranker's answer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RerankResponse {
    /// Candidate ids, best first.
    pub ranked_ids: Vec<String>,

    /// Ids of candidates the reranker considers strong matches.
    #[serde(default)]
    pub recommended_ids: Vec<String>,
}

impl RerankResponse {
    /// Parse a JSON response body.
    pub fn from_json(text: &str) -> Result<Self, RerankError> {
        Ok(serde_json::from_str(text.trim())?)
    }
}

/// A ranked product and whether the reranker recommended it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub product: Product,
    pub recommended: bool,
}

impl Recommendation {
    fn plain(product: Product) -> Self {
        Self {
            product,
            recommended: false,
        }
    }
}

/// Something that can reorder the engine's candidates.
pub trait Reranker {
    fn rerank(&self, query: &str, candidates: &[Product]) -> Result<RerankResponse, RerankError>;
}

/// Apply a reranker response to the engine's candidates.
///
/// Candidates named in `ranked_ids` come first in that order; every other
/// candidate follows in its original order. No candidate is dropped or
/// duplicated, and ids that are not candidates are ignored.
pub fn merge(candidates: Vec<Product>, response: &RerankResponse) -> Vec<Recommendation> {
    let recommended: HashSet<&str> = response.recommended_ids.iter().map(String::as_str).collect();

    // First occurrence wins when the candidates repeat an id.
    let mut by_id: HashMap<String, usize> = HashMap::with_capacity(candidates.len());
    for (index, product) in candidates.iter().enumerate() {
        by_id.entry(product.id.as_str().to_string()).or_insert(index);
    }

    let mut slots: Vec<Option<Product>> = candidates.into_iter().map(Some).collect();
    let mut merged = Vec::with_capacity(slots.len());

    for id in &response.ranked_ids {
        let Some(&index) = by_id.get(id.as_str()) else {
            continue;
        };
        if let Some(product) = slots[index].take() {
            let recommended = recommended.contains(product.id.as_str());
            merged.push(Recommendation {
                product,
                recommended,
            });
        }
    }

    merged.extend(slots.into_iter().flatten().map(Recommendation::plain));
    merged
}

/// Run `reranker` over the engine's candidates, falling back to their order
/// on any failure.
///
/// The reranker is skipped for an empty query or an empty candidate list.
pub fn rerank_or_fallback(
    reranker: &dyn Reranker,
    query: &str,
    candidates: Vec<Product>,
) -> Vec<Recommendation> {
    if query.trim().is_empty() || candidates.is_empty() {
        return candidates.into_iter().map(Recommendation::plain).collect();
    }

    match reranker.rerank(query, &candidates) {
        Ok(response) => {
            log::debug!(
                "Reranker ordered {} ids, recommended {}",
                response.ranked_ids.len(),
                response.recommended_ids.len()
            );
            merge(candidates, &response)
        }
        Err(e) => {
            log::warn!("Rerank failed, keeping engine order: {}", e);
            candidates.into_iter().map(Recommendation::plain).collect()
        }
    }
}

/// A reranker that replays a response saved on disk.
#[derive(Debug, Clone)]
pub struct ResponseFileReranker {
    path: PathBuf,
}

impl ResponseFileReranker {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Reranker for ResponseFileReranker {
    fn rerank(&self, _query: &str, _candidates: &[Product]) -> Result<RerankResponse, RerankError> {
        let text = std::fs::read_to_string(&self.path)?;
        RerankResponse::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(RerankResponse);

    impl Reranker for Fixed {
        fn rerank(&self, _: &str, _: &[Product]) -> Result<RerankResponse, RerankError> {
            Ok(self.0.clone())
        }
    }

    struct Failing;

    impl Reranker for Failing {
        fn rerank(&self, _: &str, _: &[Product]) -> Result<RerankResponse, RerankError> {
            Err(RerankError::Unavailable("timed out".to_string()))
        }
    }

    fn candidates() -> Vec<Product> {
        ["a", "b", "c"]
            .into_iter()
            .map(|id| Product::new(id, format!("Product {id}")))
            .collect()
    }

    fn ids(merged: &[Recommendation]) -> Vec<&str> {
        merged.iter().map(|r| r.product.id.as_str()).collect()
    }

    fn response(ranked: &[&str], recommended: &[&str]) -> RerankResponse {
        RerankResponse {
            ranked_ids: ranked.iter().map(|s| s.to_string()).collect(),
            recommended_ids: recommended.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_parse_response() {
        let parsed = RerankResponse::from_json(
            r#" {"rankedIds": ["b", "a"], "recommendedIds": ["b"]} "#,
        )
        .unwrap();
        assert_eq!(parsed, response(&["b", "a"], &["b"]));
    }

    #[test]
    fn test_parse_without_recommendations() {
        let parsed = RerankResponse::from_json(r#"{"rankedIds": []}"#).unwrap();
        assert!(parsed.recommended_ids.is_empty());
    }

    #[test]
    fn test_parse_malformed() {
        assert!(matches!(
            RerankResponse::from_json("Sure! Here are the results"),
            Err(RerankError::Malformed(_))
        ));
        assert!(RerankResponse::from_json(r#"{"rankedIds": "a"}"#).is_err());
    }

    #[test]
    fn test_merge_reorders_and_marks() {
        let merged = merge(candidates(), &response(&["c", "a", "b"], &["c"]));
        assert_eq!(ids(&merged), vec!["c", "a", "b"]);
        assert!(merged[0].recommended);
        assert!(!merged[1].recommended);
    }

    #[test]
    fn test_merge_appends_missing_in_engine_order() {
        let merged = merge(candidates(), &response(&["c"], &[]));
        assert_eq!(ids(&merged), vec!["c", "a", "b"]);
    }

    #[test]
    fn test_merge_ignores_unknown_and_repeated_ids() {
        let merged = merge(candidates(), &response(&["zz", "b", "b", "a"], &["zz", "a"]));
        assert_eq!(ids(&merged), vec!["b", "a", "c"]);
        assert!(!merged[0].recommended);
        assert!(merged[1].recommended);
    }

    #[test]
    fn test_merge_keeps_duplicate_candidates() {
        let mut dupes = candidates();
        dupes.push(Product::new("a", "Product a, again"));

        let merged = merge(dupes, &response(&["a", "c"], &["a"]));
        assert_eq!(ids(&merged), vec!["a", "c", "b", "a"]);
        assert_eq!(merged[0].product.name, "Product a");
        assert!(merged[0].recommended);
        assert!(!merged[3].recommended);
    }

    #[test]
    fn test_merge_large_candidate_list() {
        let many: Vec<Product> = (0..500)
            .map(|i| Product::new(format!("p{i}"), "Runner"))
            .collect();
        let reversed: Vec<String> = (0..500).rev().map(|i| format!("p{i}")).collect();
        let response = RerankResponse {
            ranked_ids: reversed.clone(),
            recommended_ids: Vec::new(),
        };

        let merged = merge(many, &response);
        assert_eq!(merged.len(), 500);
        assert_eq!(ids(&merged), reversed.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn test_fallback_on_failure() {
        let merged = rerank_or_fallback(&Failing, "red", candidates());
        assert_eq!(ids(&merged), vec!["a", "b", "c"]);
        assert!(merged.iter().all(|r| !r.recommended));
    }

    #[test]
    fn test_skips_reranker_for_empty_query() {
        let reranker = Fixed(response(&["c", "b", "a"], &["c"]));
        let merged = rerank_or_fallback(&reranker, " ", candidates());
        assert_eq!(ids(&merged), vec!["a", "b", "c"]);

        let merged = rerank_or_fallback(&reranker, "red", candidates());
        assert_eq!(ids(&merged), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_response_file_reranker() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("response.json");
        std::fs::write(&path, r#"{"rankedIds": ["b"], "recommendedIds": ["b"]}"#).unwrap();

        let merged = rerank_or_fallback(&ResponseFileReranker::new(&path), "red", candidates());
        assert_eq!(ids(&merged), vec!["b", "a", "c"]);
        assert!(merged[0].recommended);

        let missing = ResponseFileReranker::new(dir.path().join("missing.json"));
        assert!(matches!(
            missing.rerank("red", &candidates()),
            Err(RerankError::Io(_))
        ));
    }
}
