//! Query parsing.

use novexa_core::WordMatcher;

/// Lowercase, whitespace-split, non-empty tokens. No stemming, no stop words,
/// punctuation stays attached to its token.
pub fn tokenize(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// The query as a whole phrase: lowercased and trimmed.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// A parsed query: the normalized phrase plus one compiled matcher per token.
///
/// Repeated tokens are kept, so repeating a word weighs it again.
#[derive(Debug, Clone)]
pub struct Query {
    phrase: String,
    matchers: Vec<WordMatcher>,
}

impl Query {
    pub fn parse(raw: &str) -> Self {
        let phrase = normalize_query(raw);
        let matchers = tokenize(&phrase)
            .iter()
            .map(|token| WordMatcher::new(token))
            .collect();
        Self { phrase, matchers }
    }

    pub fn is_empty(&self) -> bool {
        self.phrase.is_empty()
    }

    pub fn phrase(&self) -> &str {
        &self.phrase
    }

    pub fn matchers(&self) -> &[WordMatcher] {
        &self.matchers
    }

    pub fn tokens(&self) -> impl Iterator<Item = &str> {
        self.matchers.iter().map(WordMatcher::token)
    }
}
