mod browser;
mod cli;
mod commands;
mod config;
mod constants;
mod engine;
mod feed;
mod highlight;
mod platform;
mod render;
mod sitemap;
mod ui;

use clap::Parser;
use cli::{Cli, Commands};
use config::Settings;

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.feed)?;

    let code = match cli.command {
        Commands::Search { filters, json } => {
            commands::search::search(&settings, &filters, json).await?
        }
        Commands::Page {
            filters,
            output,
            title,
        } => commands::page::page(&settings, &filters, output.as_deref(), &title).await?,
        Commands::Browse => commands::browse::browse(&settings).await?,
        Commands::Sitemap { headers } => {
            commands::sitemap::sitemap(&settings, headers)?;
            0
        }
        Commands::Platforms => {
            commands::platforms::platforms()?;
            0
        }
    };

    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
