// CLI module for handling command-line interface

use crate::config::Settings;
use crate::engine::{FilterCriteria, SortDirection, SortField};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dlhub", version)]
#[command(about = "Search and filter downloadable release builds from a version feed")]
pub struct Cli {
    /// Feed location (URL or local JSON file), overrides config and DLHUB_FEED
    #[arg(long, global = true)]
    pub feed: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List matching versions in the terminal
    Search {
        #[command(flatten)]
        filters: FilterArgs,
        /// Print matching entries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Render matching versions as a standalone HTML page
    Page {
        #[command(flatten)]
        filters: FilterArgs,
        /// Write to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long, default_value = "Cursor Downloads")]
        title: String,
    },
    /// Interactive search session
    Browse,
    /// Print the site sitemap
    Sitemap {
        /// Print the response headers before the body
        #[arg(long)]
        headers: bool,
    },
    /// List known platform keys
    Platforms,
}

#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Case-insensitive substring of the version number
    pub query: Option<String>,
    /// Only versions offering this platform key (e.g. linux-x64)
    #[arg(short, long)]
    pub platform: Option<String>,
    #[arg(long, value_enum)]
    pub sort: Option<SortField>,
    #[arg(long, value_enum)]
    pub order: Option<SortDirection>,
}

impl FilterArgs {
    /// Build complete criteria, filling gaps from the configured defaults
    pub fn to_criteria(&self, settings: &Settings) -> FilterCriteria {
        FilterCriteria {
            query: self.query.clone().unwrap_or_default(),
            platform: self.platform.clone().filter(|p| !p.is_empty()),
            sort_field: self.sort.unwrap_or(settings.default_sort),
            sort_direction: self.order.unwrap_or(settings.default_order),
        }
    }
}
