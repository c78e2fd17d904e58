//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Widex widget template extractor CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: widex.toml)
    #[arg(short = 'C', long, default_value = "widex.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    // -V stays reserved for the auto-generated version flag
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Index widget instances in a layout export, grouped by type
    #[command(visible_alias = "i")]
    Index {
        /// Layout export to read (default: elementor_data.json)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        /// Where to write the index snapshot (default: widget_index.json)
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Extract one template per widget type from an index snapshot
    #[command(visible_alias = "e")]
    Extract {
        /// Index snapshot to read (default: widget_index.json)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        index: Option<PathBuf>,

        /// Directory for templates and manifest (default: templates/)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },

    /// Run the whole pipeline: index, then extract
    #[command(visible_alias = "r")]
    Run {
        /// Layout export to read (default: elementor_data.json)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: Option<PathBuf>,

        /// Directory for templates and manifest (default: templates/)
        #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
        output: Option<PathBuf>,
    },
}

#[allow(unused)]
impl Cli {
    pub const fn is_index(&self) -> bool {
        matches!(self.command, Commands::Index { .. })
    }
    pub const fn is_extract(&self) -> bool {
        matches!(self.command, Commands::Extract { .. })
    }
    pub const fn is_run(&self) -> bool {
        matches!(self.command, Commands::Run { .. })
    }
}
