//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pagekit CLI
#[derive(Parser, Debug)]
#[command(name = "pagekit")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dataset file (JSON array)
    #[arg(short, long, global = true)]
    pub data: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show a single page of the dataset
    Show {
        /// Page number (1-based)
        #[arg(short, long, default_value = "1")]
        page: i64,

        /// Items per page
        #[arg(short = 'n', long, default_value = "25")]
        per_page: i64,

        /// Skip the total page count query
        #[arg(long)]
        no_total: bool,
    },

    /// Walk every page forward from a starting page
    Walk {
        /// Page to start from (1-based)
        #[arg(long, default_value = "1")]
        from: i64,

        /// Items per page
        #[arg(short = 'n', long, default_value = "25")]
        per_page: i64,
    },

    /// Summarize the dataset and its page layout
    Info {
        /// Items per page
        #[arg(short = 'n', long, default_value = "25")]
        per_page: i64,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one page object per line)
    Json,
    /// Human-readable output
    Pretty,
}
