//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::error::{Error, Result, ResultExt};
use crate::pagination::{PageRequest, Pager};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Show {
                page,
                per_page,
                no_total,
            } => self.show(*page, *per_page, *no_total),
            Commands::Walk { from, per_page } => self.walk(*from, *per_page),
            Commands::Info { per_page } => self.info(*per_page),
        }
    }

    /// Load the dataset named on the command line
    fn dataset(&self) -> Result<Vec<Value>> {
        let path = self
            .cli
            .data
            .as_ref()
            .ok_or_else(|| Error::config("Dataset file not specified (use -d flag)"))?;
        load_dataset(path).with_context(|| format!("failed to load {}", path.display()))
    }

    /// Print a single page
    fn show(&self, page: i64, per_page: i64, no_total: bool) -> Result<()> {
        let data = self.dataset()?;

        let mut request = PageRequest::new(page, per_page);
        if no_total {
            request = request.without_total_page_count();
        }
        let pager = Pager::from_request(Some(&data), &request)?;

        self.print_page(&pager)
    }

    /// Print every page from `from` forward
    fn walk(&self, from: i64, per_page: i64) -> Result<()> {
        let data = self.dataset()?;
        let mut pager = Pager::from_request(Some(&data), &PageRequest::new(from, per_page))?;

        self.print_page(&pager)?;
        while pager.has_more_pages() {
            pager.next_page();
            self.print_page(&pager)?;
        }

        Ok(())
    }

    /// Print a summary of the dataset's page layout
    fn info(&self, per_page: i64) -> Result<()> {
        let data = self.dataset()?;
        let pager = Pager::new(&data, 1, per_page);

        match self.cli.format {
            OutputFormat::Json => {
                let summary = json!({
                    "items": data.len(),
                    "items_per_page": pager.items_per_page(),
                    "total_pages": pager.total_pages(),
                });
                println!("{}", serde_json::to_string(&summary)?);
            }
            OutputFormat::Pretty => {
                println!(
                    "{} items, {} per page, {} pages",
                    data.len(),
                    pager.items_per_page(),
                    pager.total_pages()
                );
            }
        }

        Ok(())
    }

    /// Print one page in the selected output format
    fn print_page(&self, pager: &Pager<'_, Vec<Value>>) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                let page = json!({
                    "info": pager.info(),
                    "items": pager.paged_result(),
                });
                println!("{}", serde_json::to_string(&page)?);
            }
            OutputFormat::Pretty => {
                let info = pager.info();
                let total = info
                    .total_pages
                    .map_or_else(|| "?".to_string(), |t| t.to_string());
                println!(
                    "--- page {}/{} ({} items, more: {}) ---",
                    info.page,
                    total,
                    pager.paged_result().len(),
                    if info.has_more_pages { "yes" } else { "no" }
                );
                for item in pager.paged_result() {
                    println!("{item}");
                }
            }
        }

        Ok(())
    }
}

/// Load a JSON array dataset from disk.
///
/// The file must hold a single top-level JSON array; each element becomes
/// one item of the paged sequence.
pub fn load_dataset(path: &Path) -> Result<Vec<Value>> {
    if !path.exists() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let raw = fs::read_to_string(path)?;
    let parsed: Value = serde_json::from_str(&raw)?;

    match parsed {
        Value::Array(items) => {
            debug!(items = items.len(), path = %path.display(), "loaded dataset");
            Ok(items)
        }
        _ => Err(Error::invalid_argument("dataset must be a JSON array")),
    }
}
