//! Catalog snapshots.
//!
//! A snapshot is an ordered list of normalized products. Order matters: the
//! engine falls back to it when a query carries no lexical signal, so callers
//! usually supply it newest-first.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::Result;
use crate::model::Product;
use crate::normalize::{Normalizer, RawProduct};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Load a snapshot from a JSON file holding an array of raw records.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not a JSON array of
    /// records, or contains a record without an id.
    pub fn load(path: &Path, normalizer: &Normalizer) -> Result<Self> {
        let file = File::open(path)?;
        let catalog = Self::from_reader(BufReader::new(file), normalizer)?;
        log::info!(
            "Loaded {} products from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Read a snapshot from any JSON source.
    pub fn from_reader<R: Read>(reader: R, normalizer: &Normalizer) -> Result<Self> {
        let raws: Vec<RawProduct> = serde_json::from_reader(reader)?;
        let products = normalizer.normalize_all(raws)?;
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
