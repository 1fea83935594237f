pub mod config;
pub mod explain;
pub mod search;

pub use explain::run_explain;
pub use search::{run_search, SearchArgs};

use anyhow::{Context, Result};
use novexa_core::Catalog;

use crate::config::Config;

/// Load and normalize the configured catalog snapshot.
fn load_catalog(config: &Config) -> Result<Catalog> {
    let Some(path) = &config.catalog_path else {
        anyhow::bail!(
            "No catalog configured.\n\nPass --catalog /path/to/catalog.json, set NOVEXA_CATALOG_PATH, \
             or add catalog_path to {}",
            crate::config::config_file_path().display()
        );
    };

    Catalog::load(path, &config.normalizer())
        .with_context(|| format!("Failed to load catalog from {}", path.display()))
}
