//! Per-product relevance scoring.
//!
//! Every query token is checked independently against each signal and the
//! contributions are summed. A token may hit several signals at once, and a
//! repeated token is counted again. A product with no matching signal scores 0.

use serde::Serialize;

use novexa_core::{Product, WordMatcher};

use crate::query::Query;
use crate::weights::Weights;

/// Contribution of each signal to a product's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub color: u32,
    pub tags: u32,
    pub features: u32,
    pub gender: u32,
    pub style: u32,
    pub height: u32,
    pub category: u32,
    pub pattern: u32,
    pub text_word: u32,
    pub text_substring: u32,
    pub phrase: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        [
            self.color,
            self.tags,
            self.features,
            self.gender,
            self.style,
            self.height,
            self.category,
            self.pattern,
            self.text_word,
            self.text_substring,
            self.phrase,
        ]
        .into_iter()
        .fold(0, u32::saturating_add)
    }

    /// Signals that contributed, as `(name, points)` pairs in table order.
    pub fn signals(&self) -> Vec<(&'static str, u32)> {
        [
            ("color", self.color),
            ("tags", self.tags),
            ("features", self.features),
            ("gender", self.gender),
            ("style", self.style),
            ("height", self.height),
            ("category", self.category),
            ("pattern", self.pattern),
            ("text_word", self.text_word),
            ("text_substring", self.text_substring),
            ("phrase", self.phrase),
        ]
        .into_iter()
        .filter(|(_, points)| *points > 0)
        .collect()
    }
}

fn award(slot: &mut u32, hit: bool, weight: u32) {
    if hit {
        *slot = slot.saturating_add(weight);
    }
}

fn any_matches(values: &[String], matcher: &WordMatcher) -> bool {
    values.iter().any(|v| matcher.matches_field(v))
}

/// Score a product against a parsed query, signal by signal.
pub fn explain(product: &Product, query: &Query, weights: &Weights) -> ScoreBreakdown {
    let mut b = ScoreBreakdown::default();
    if query.is_empty() {
        return b;
    }

    let text = product.search_text();

    for m in query.matchers() {
        award(&mut b.color, m.matches_field(&product.color), weights.color);
        award(&mut b.tags, any_matches(&product.tags, m), weights.tag);
        award(&mut b.features, any_matches(&product.features, m), weights.feature);
        award(&mut b.gender, m.matches_field(&product.gender), weights.gender);
        award(&mut b.style, m.matches_field(&product.style), weights.style);
        award(&mut b.height, m.matches_field(&product.height), weights.height);
        award(&mut b.category, m.matches_field(&product.category), weights.category);
        award(&mut b.pattern, m.matches_field(&product.pattern), weights.pattern);

        if m.is_match(&text) {
            award(&mut b.text_word, true, weights.text_word);
        } else {
            award(&mut b.text_substring, m.contains(&text), weights.text_substring);
        }
    }

    award(&mut b.phrase, text.contains(query.phrase()), weights.phrase);
    b
}

/// Total relevance score of a product.
pub fn score(product: &Product, query: &Query, weights: &Weights) -> u32 {
    explain(product, query, weights).total()
}
