//! CLI argument definitions using clap
//!
//! Commands:
//! - arbordb load --input <dir> --output <dir> [--forests N] [--config <path>]
//! - arbordb plan [--forests N] <uri>...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// arbordb - forest-partitioned bulk document loader
#[derive(Parser, Debug)]
#[command(name = "arbordb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load a directory of files into a forest-partitioned store
    Load {
        /// Directory of input files
        #[arg(long)]
        input: PathBuf,

        /// Root directory of the target store
        #[arg(long)]
        output: PathBuf,

        /// Number of forests to shard across
        #[arg(long, default_value_t = 2)]
        forests: usize,

        /// Path to a loader configuration file (JSON)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Override the configured batch size
        #[arg(long)]
        batch_size: Option<usize>,

        /// Let the loader pick the target forest per document
        #[arg(long)]
        fast_load: bool,

        /// Directory prefix applied to document URIs
        #[arg(long)]
        output_dir: Option<String>,
    },

    /// Report forest placement for URIs without writing anything
    Plan {
        /// Number of forests to place against
        #[arg(long, default_value_t = 2)]
        forests: usize,

        /// Document URIs to place
        uris: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
