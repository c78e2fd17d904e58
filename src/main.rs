//! Widex - widget indexer and template extractor for Elementor site exports.

mod cli;
mod config;
mod extractor;
mod indexer;
mod layout;
mod logger;
mod schema;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::WidexConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = WidexConfig::load(&cli)?;

    match &cli.command {
        Commands::Index { input, output } => {
            cli::index::run_index(input.as_deref(), output.as_deref(), &config)
        }
        Commands::Extract { index, output } => {
            cli::extract::run_extract(index.as_deref(), output.as_deref(), &config)
        }
        Commands::Run { input, output } => {
            cli::run::run_pipeline(input.as_deref(), output.as_deref(), &config)
        }
    }
}
