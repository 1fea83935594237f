use anyhow::{Context, Result};

use crate::config::{self, Config};

/// Show the current effective configuration.
pub fn show_config(config: &Config) -> Result<()> {
    println!("Current Configuration");
    println!("=====================\n");

    let path = config::config_file_path();
    println!("Config file: {}", path.display());
    println!(
        "File exists: {}\n",
        if path.exists() { "yes" } else { "no (using defaults)" }
    );

    println!("Settings:");
    println!(
        "  catalog_path: {}",
        config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| String::from("<not set>"))
    );
    println!("  colors: {}", config.colors.join(", "));
    println!("  log_level: {}", config.log_level);
    println!("  log_coloured: {}", config.log_coloured);
    println!("  ranking.limit: {}", config.ranking.limit);

    let weights = toml::to_string(&config.ranking.weights).context("Failed to encode weights")?;
    println!("  ranking.weights:");
    for line in weights.lines() {
        println!("    {line}");
    }

    println!("\nPriority: CLI args > ENV vars (NOVEXA_*) > Config file > Defaults");

    Ok(())
}

/// Show the config file path.
pub fn show_path() {
    println!("{}", config::config_file_path().display());
}

/// Show example configuration.
pub fn show_example() {
    print!("{}", config::example_config());
}

/// Initialize config file with defaults.
pub fn init_config() -> Result<()> {
    let created = config::ensure_config_file()?;
    let config_path = config::config_file_path();

    if created {
        println!("✓ Created config file: {}", config_path.display());
        println!("\nEdit this file to configure novexa.");
    } else {
        println!("Config file already exists: {}", config_path.display());
    }

    Ok(())
}
