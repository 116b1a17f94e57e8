//! CLI module
//!
//! Command-line interface for paging JSON datasets from the terminal.
//!
//! # Commands
//!
//! - `show` - Print a single page of the dataset
//! - `walk` - Print every page forward from a starting page
//! - `info` - Summarize the dataset and its page layout

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{load_dataset, Runner};
