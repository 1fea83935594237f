use serde::{Deserialize, Serialize};

use crate::model::ids::ProductId;

/// Audience label used when a record carries no gender/main category.
pub const UNISEX: &str = "unisex";

/// A catalog product in the strict shape the relevance engine scores.
///
/// Every field is populated: conceptually absent values are empty strings or
/// empty lists. Building this shape from loose storefront records is the job
/// of [`crate::normalize::Normalizer`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,

    /// Target audience (e.g. "men", "women", "kids"); defaults to [`UNISEX`].
    pub gender: String,

    pub color: String,
    pub style: String,
    pub height: String,
    pub pattern: String,

    /// Sub-category name (e.g. "Sneakers", "Boots").
    pub category: String,

    pub tags: Vec<String>,
    pub features: Vec<String>,

    // Carried through for callers; never scored.
    pub price: f64,
    pub url: String,
    pub images: Vec<String>,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: ProductId::new(""),
            name: String::new(),
            description: String::new(),
            gender: UNISEX.to_string(),
            color: String::new(),
            style: String::new(),
            height: String::new(),
            pattern: String::new(),
            category: String::new(),
            tags: Vec::new(),
            features: Vec::new(),
            price: 0.0,
            url: String::new(),
            images: Vec::new(),
        }
    }
}

impl Product {
    #[must_use]
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_gender(mut self, gender: impl Into<String>) -> Self {
        self.gender = gender.into();
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    #[must_use]
    pub fn with_height(mut self, height: impl Into<String>) -> Self {
        self.height = height.into();
        self
    }

    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    #[must_use]
    pub fn with_feature(mut self, feature: impl Into<String>) -> Self {
        self.features.push(feature.into());
        self
    }

    #[must_use]
    pub fn with_price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    /// Name and description joined by a single space, lowercased.
    #[must_use]
    pub fn search_text(&self) -> String {
        format!("{} {}", self.name, self.description).to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_new_defaults() {
        let product = Product::new("p1", "Trail Runner");
        assert_eq!(product.id.as_str(), "p1");
        assert_eq!(product.name, "Trail Runner");
        assert_eq!(product.gender, UNISEX);
        assert!(product.color.is_empty());
        assert!(product.tags.is_empty());
        assert!(product.features.is_empty());
    }

    #[test]
    fn test_product_builder() {
        let product = Product::new("p2", "Chelsea Boot")
            .with_color("brown")
            .with_gender("men")
            .with_category("Boots")
            .with_tag("leather")
            .with_tag("winter")
            .with_feature("Waterproof lining");

        assert_eq!(product.color, "brown");
        assert_eq!(product.gender, "men");
        assert_eq!(product.category, "Boots");
        assert_eq!(product.tags, vec!["leather", "winter"]);
        assert_eq!(product.features, vec!["Waterproof lining"]);
    }

    #[test]
    fn test_search_text_is_lowercased() {
        let product = Product::new("p3", "Dress SHOE").with_description("Polished Oxford");
        assert_eq!(product.search_text(), "dress shoe polished oxford");
    }

    #[test]
    fn test_deserialize_fills_missing_fields() {
        let product: Product = serde_json::from_str(r#"{"id": "x", "name": "Loafer"}"#).unwrap();
        assert_eq!(product.id.as_str(), "x");
        assert_eq!(product.gender, UNISEX);
        assert!(product.pattern.is_empty());
    }
}
