use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

mod commands;
mod config;

use config::Config;

#[derive(Debug, Parser)]
#[command(name = "novexa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog snapshot (JSON array of product records)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// TOML file of signal weights overriding the configured ones
    #[arg(long, global = true)]
    weights: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Search the catalog
    ///
    /// Scores every product against the query and prints the best matches,
    /// most relevant first:
    ///
    /// - Exact color, tag, feature, gender, style, height, category and
    ///   pattern matches count most
    /// - Whole words in the name or description count less, partial words
    ///   least
    /// - Results are capped (20 by default)
    ///
    /// An empty query, or one that matches nothing, lists the first products
    /// of the catalog in their stored order.
    ///
    /// With --rerank-response, a saved answer from an external reranker is
    /// merged over the result. A missing or malformed answer leaves the
    /// ranking as it is.
    Search {
        /// Free-text query
        query: Vec<String>,

        /// Maximum number of results (at most 20)
        #[arg(long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Saved reranker response ({"rankedIds": [...], "recommendedIds": [...]})
        #[arg(long)]
        rerank_response: Option<PathBuf>,

        /// Only print products the reranker recommended
        #[arg(long, requires = "rerank_response")]
        recommended_only: bool,
    },
    /// Show how each result's score is built up
    Explain {
        /// Free-text query
        query: Vec<String>,

        /// Print breakdowns as JSON
        #[arg(long)]
        json: bool,
    },
    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Show the effective configuration
    Show,
    /// Print the config file path
    Path,
    /// Print an example config file
    Example,
    /// Create the config file with defaults
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?
        .with_overrides(cli.catalog, cli.verbose)
        .with_weights_file(cli.weights.as_deref())?;
    config::init_logging(&config)?;

    match cli.command {
        Commands::Search {
            query,
            limit,
            json,
            rerank_response,
            recommended_only,
        } => {
            commands::run_search(
                &config,
                &commands::SearchArgs {
                    query: query.join(" "),
                    limit,
                    json,
                    rerank_response,
                    recommended_only,
                },
            )?;
        }
        Commands::Explain { query, json } => {
            commands::run_explain(&config, &query.join(" "), json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config)?,
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Example => commands::config::show_example(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}
