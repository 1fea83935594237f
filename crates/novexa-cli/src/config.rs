use anyhow::{Context, Result};
use confyg::{env, Confygery};
use novexa_core::normalize::DEFAULT_COLORS;
use novexa_core::{ColorPalette, Normalizer};
use novexa_search::{RankOptions, Weights};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for novexa.
///
/// Configuration is loaded from multiple sources with the following priority:
/// 1. CLI arguments (highest priority)
/// 2. Environment variables (NOVEXA_* prefix)
/// 3. Config file (~/.config/novexa/config.toml)
/// 4. Built-in defaults (lowest priority)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog snapshot to search (JSON array of product records).
    ///
    /// Can be set via:
    /// - CLI: --catalog /path/to/catalog.json
    /// - ENV: NOVEXA_CATALOG_PATH
    /// - Config: catalog_path = "/path/to/catalog.json"
    pub catalog_path: Option<PathBuf>,

    /// Result cap and signal weights.
    pub ranking: RankOptions,

    /// Color words used to infer a product's color from its name and
    /// description when the record has none. An empty list disables inference.
    pub colors: Vec<String>,

    /// Log level: trace, debug, info, warn or error.
    pub log_level: String,

    /// Colour log output.
    pub log_coloured: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            ranking: RankOptions::default(),
            colors: DEFAULT_COLORS.iter().map(|c| (*c).to_string()).collect(),
            log_level: String::from("warn"),
            log_coloured: true,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load() -> Result<Self> {
        let config_path = config_file_path();

        let mut builder = Confygery::new().context("Failed to create config builder")?;

        if config_path.exists() {
            let path_str = config_path
                .to_str()
                .ok_or_else(|| anyhow::anyhow!("Config path contains invalid UTF-8"))?;
            builder
                .add_file(path_str)
                .context("Failed to load config file")?;
        }

        let env_opts = env::Options::with_top_level("novexa");
        builder
            .add_env(env_opts)
            .context("Failed to load environment variables")?;

        let config: Self = builder
            .build()
            .context("Failed to build configuration")?;

        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded configuration.
    #[must_use]
    pub fn with_overrides(mut self, catalog: Option<PathBuf>, verbose: bool) -> Self {
        if catalog.is_some() {
            self.catalog_path = catalog;
        }
        if verbose {
            self.log_level = String::from("debug");
        }
        self
    }

    /// Replace the configured signal weights with those in a TOML file.
    pub fn with_weights_file(mut self, path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            self.ranking.weights = Weights::load(path)
                .with_context(|| format!("Failed to load weights from {}", path.display()))?;
        }
        Ok(self)
    }

    /// Build the catalog normalizer from the configured color vocabulary.
    pub fn normalizer(&self) -> Normalizer {
        Normalizer::new(ColorPalette::from_words(&self.colors))
    }

    pub fn log_level(&self) -> twyg::LogLevel {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => twyg::LogLevel::Trace,
            "debug" => twyg::LogLevel::Debug,
            "info" => twyg::LogLevel::Info,
            "error" => twyg::LogLevel::Error,
            _ => twyg::LogLevel::Warn,
        }
    }
}

/// Set up the logger from configuration.
pub fn init_logging(config: &Config) -> Result<()> {
    let opts = twyg::OptsBuilder::new()
        .coloured(config.log_coloured)
        .level(config.log_level())
        .build()
        .map_err(|e| anyhow::anyhow!("Invalid logging options: {e:?}"))?;

    twyg::setup(opts).map_err(|e| anyhow::anyhow!("Could not set up logger: {e:?}"))?;
    Ok(())
}

/// Get the config file path.
///
/// Returns:
/// - Linux: ~/.config/novexa/config.toml
/// - macOS: ~/Library/Application Support/novexa/config.toml
/// - Windows: %APPDATA%\novexa\config.toml
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("novexa")
        .join("config.toml")
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Novexa Configuration File
#
# Configuration is loaded from multiple sources with the following priority:
# 1. CLI arguments (highest priority)
# 2. Environment variables (NOVEXA_* prefix)
# 3. This config file
# 4. Built-in defaults (lowest priority)

# Catalog snapshot to search: a JSON array of product records as exported
# by the storefront, newest first.
#
# Can also be set via:
# - CLI: novexa --catalog /path/to/catalog.json search "black boots"
# - Environment: NOVEXA_CATALOG_PATH=/path/to/catalog.json
#catalog_path = "/path/to/catalog.json"

# Color words used to infer a missing color from name + description.
# Tried in order; the first whole-word hit wins. Set to [] to disable.
colors = ["black", "white", "pink", "red", "blue", "green", "yellow", "purple",
          "brown", "grey", "gray", "orange", "beige", "cream", "navy"]

# Logging: trace, debug, info, warn, error
log_level = "warn"
log_coloured = true

[ranking]
# Results per query, capped at 20 (0 or anything above 20 means 20)
limit = 20

# Points per matching signal. Each query token is scored independently.
[ranking.weights]
color = 10
tag = 6
feature = 5
gender = 4
style = 4
height = 4
category = 3
pattern = 3
text_word = 3
text_substring = 1
phrase = 5
"#
}

/// Create default config file if it doesn't exist.
///
/// Returns true if a new file was created, false if it already existed.
pub fn ensure_config_file() -> Result<bool> {
    let config_path = config_file_path();

    if config_path.exists() {
        return Ok(false);
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
    }

    std::fs::write(&config_path, example_config()).context("Failed to write config file")?;

    Ok(true)
}
