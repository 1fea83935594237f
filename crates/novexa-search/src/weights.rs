//! Signal weights for relevance scoring.
//!
//! Exact categorical matches outrank incidental hits in prose. Color is the
//! strongest single signal for apparel and footwear search.

use std::path::Path;

use serde::{Deserialize, Serialize};

use novexa_core::{Error, Result};

/// Points awarded per matching signal. All weights are unsigned, so no
/// contribution can lower a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Weights {
    /// `color` equals or word-matches a token.
    pub color: u32,
    /// A tag equals or word-matches a token.
    pub tag: u32,
    /// A feature equals or word-matches a token.
    pub feature: u32,
    pub gender: u32,
    pub style: u32,
    pub height: u32,
    pub category: u32,
    pub pattern: u32,
    /// Name or description contains a token as a whole word.
    pub text_word: u32,
    /// Name or description contains a token only as a substring.
    pub text_substring: u32,
    /// The whole query appears in name or description. Counted once.
    pub phrase: u32,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            color: 10,
            tag: 6,
            feature: 5,
            gender: 4,
            style: 4,
            height: 4,
            category: 3,
            pattern: 3,
            text_word: 3,
            text_substring: 1,
            phrase: 5,
        }
    }
}

impl Weights {
    /// Parse weights from TOML. Missing keys keep their default.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::InvalidData(format!("failed to parse weights: {e}")))
    }

    /// Load weights from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| {
            Error::InvalidData(format!("{} ({})", e, path.display()))
        })
    }
}
