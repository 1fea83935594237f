//! Lexical product relevance ranking for novexa.
//!
//! Scores every product in a catalog snapshot against a free-text query
//! using weighted whole-word matches on categorical fields and softer matches
//! on name and description, then returns a capped, stable, relevance-ordered
//! subset. The ranking is pure and deterministic; an optional external
//! reranker can reorder its output through the [`rerank`] contract.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod query;
pub mod rank;
pub mod rerank;
pub mod score;
pub mod weights;

pub use query::{normalize_query, tokenize, Query};
pub use rank::{rank, RankOptions, Ranker, Scored, MAX_RESULTS};
pub use rerank::{
    merge, rerank_or_fallback, Recommendation, RerankError, RerankResponse, Reranker,
    ResponseFileReranker,
};
pub use score::{explain, score, ScoreBreakdown};
pub use weights::Weights;
