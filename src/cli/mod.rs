//! CLI commands for Unicode Finder.
//!
//! Provides terminal access to the same search core the desktop UI uses:
//! search, copy, generate, config.

pub mod generate;
pub mod search;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Config;
use crate::services::loader::DatasetSource;

#[derive(Parser)]
#[command(name = "unicode-finder")]
#[command(about = "Search emojis by name, keyword, or character", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Dataset to use: file path, http(s) URL, or "bundled"
    #[arg(long, global = true, value_name = "SOURCE")]
    pub dataset: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List emojis matching a query (all of them when the query is blank)
    Search {
        /// Search terms, glyphs allowed
        query: Vec<String>,

        /// Print at most this many results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Copy a matching emoji to the clipboard
    Copy {
        /// Search terms, glyphs allowed
        #[arg(required = true)]
        query: Vec<String>,

        /// Which match to copy (0 = first)
        #[arg(short, long, default_value_t = 0)]
        index: usize,
    },

    /// Regenerate the dataset from Unicode emoji-test.txt and CLDR annotations
    Generate {
        /// Output file (default: data directory)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the config file location and effective settings
    Config {
        /// Write the effective settings to the config file
        #[arg(long)]
        init: bool,
    },
}

/// Join positional words back into the raw query the matcher sees.
pub fn join_query(words: &[String]) -> String {
    words.join(" ")
}

/// Dataset source for this invocation: `--dataset`, then config, then auto-detect.
pub fn dataset_source(cli_override: Option<&str>, config: &Config) -> DatasetSource {
    DatasetSource::resolve(cli_override.or(config.dataset.source.as_deref()))
}

/// Run a parsed command line.
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load();
    let source = dataset_source(cli.dataset.as_deref(), &config);

    match cli.command {
        Commands::Search { query, limit, json } => {
            search::run_search(&source, &join_query(&query), limit, json).await
        }
        Commands::Copy { query, index } => {
            search::run_copy(&source, &join_query(&query), index, &config).await
        }
        Commands::Generate { output } => generate::run_generate(output).await,
        Commands::Config { init } => {
            let path = Config::config_path();
            if init {
                config.save()?;
                println!("Wrote {}", path.display());
            } else {
                println!("# {}", path.display());
            }
            print!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
    }
}
