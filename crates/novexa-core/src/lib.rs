//! Core domain model for novexa.
//!
//! This crate defines the strict `Product` shape the relevance engine scores,
//! the normalization boundary that turns loose storefront records into that
//! shape, catalog snapshot loading, and the word-boundary text matcher shared
//! by normalization and scoring.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod normalize;
pub mod text;

pub use catalog::Catalog;
pub use error::{Error, Result};
pub use model::{Product, ProductId, UNISEX};
pub use normalize::{ColorPalette, Normalizer, RawProduct};
pub use text::WordMatcher;
