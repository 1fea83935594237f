//! The normalization boundary between storefront records and the engine.
//!
//! Records arrive from the data-access layer in a loose shape: any field may
//! be missing or null, the audience is stored as `mainCategory`, and the
//! sub-category may be a relation object. [`Normalizer`] maps them into the
//! strict [`Product`] shape once, so scoring code never deals with absence.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::model::{Product, ProductId, UNISEX};
use crate::text::WordMatcher;

/// Color words tried, in order, when a record has no stored color.
pub const DEFAULT_COLORS: &[&str] = &[
    "black", "white", "pink", "red", "blue", "green", "yellow", "purple", "brown", "grey", "gray",
    "orange", "beige", "cream", "navy",
];

/// A product record as delivered by the data-access layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawProduct {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,

    /// Audience label; the storefront stores this as its main category.
    #[serde(rename = "mainCategory", alias = "main_category")]
    pub main_category: Option<String>,
    pub gender: Option<String>,

    pub color: Option<String>,
    pub style: Option<String>,
    pub height: Option<String>,
    pub pattern: Option<String>,

    #[serde(alias = "Category")]
    pub category: Option<RawCategory>,

    pub tags: Option<Vec<String>>,
    pub features: Option<Vec<String>>,

    pub price: Option<f64>,
    pub url: Option<String>,
    pub images: Option<Vec<String>>,
}

/// A sub-category as either a plain label or a joined relation row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawCategory {
    Plain(String),
    Relation { name: Option<String> },
}

impl RawCategory {
    fn into_label(self) -> String {
        match self {
            Self::Plain(label) => label,
            Self::Relation { name } => name.unwrap_or_default(),
        }
    }
}

/// Vocabulary of color words used to infer a missing color.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    words: Vec<WordMatcher>,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::from_words(DEFAULT_COLORS.iter().copied())
    }
}

impl ColorPalette {
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .map(|w| WordMatcher::new(&w))
            .collect();
        Self { words }
    }

    /// An empty palette disables color inference.
    #[must_use]
    pub fn empty() -> Self {
        Self { words: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// First palette word, in palette order, appearing in `text` as a whole word.
    pub fn infer(&self, text: &str) -> Option<&str> {
        self.words
            .iter()
            .find(|w| w.is_match(text))
            .map(|w| w.token())
    }
}

/// Converts [`RawProduct`] records into strict [`Product`] values.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    palette: ColorPalette,
}

impl Normalizer {
    #[must_use]
    pub fn new(palette: ColorPalette) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &ColorPalette {
        &self.palette
    }

    /// Normalize one record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidData`] when the record has no usable id.
    pub fn normalize(&self, raw: RawProduct) -> Result<Product> {
        let id = raw
            .id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty())
            .ok_or_else(|| {
                Error::InvalidData(format!(
                    "product record without an id (name: {:?})",
                    raw.name.as_deref().unwrap_or_default()
                ))
            })?;

        let name = raw.name.unwrap_or_default();
        let description = raw.description.unwrap_or_default();

        let gender = raw
            .main_category
            .or(raw.gender)
            .filter(|g| !g.trim().is_empty())
            .unwrap_or_else(|| UNISEX.to_string());

        let stored_color = raw.color.unwrap_or_default().trim().to_lowercase();
        let color = if stored_color.is_empty() {
            let text = format!("{name} {description}");
            self.palette.infer(&text).unwrap_or_default().to_string()
        } else {
            stored_color
        };

        Ok(Product {
            id: ProductId::new(id),
            name,
            description,
            gender,
            color,
            style: raw.style.unwrap_or_default(),
            height: raw.height.unwrap_or_default(),
            pattern: raw.pattern.unwrap_or_default(),
            category: raw.category.map(RawCategory::into_label).unwrap_or_default(),
            tags: raw.tags.unwrap_or_default(),
            features: raw.features.unwrap_or_default(),
            price: raw.price.unwrap_or_default(),
            url: raw.url.unwrap_or_default(),
            images: raw.images.unwrap_or_default(),
        })
    }

    /// Normalize a batch, preserving input order.
    ///
    /// # Errors
    ///
    /// Fails on the first record that cannot be normalized.
    pub fn normalize_all(&self, raws: impl IntoIterator<Item = RawProduct>) -> Result<Vec<Product>> {
        raws.into_iter().map(|raw| self.normalize(raw)).collect()
    }
}
