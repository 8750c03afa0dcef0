// Page command: static HTML rendering

use crate::browser::Browser;
use crate::cli::FilterArgs;
use crate::commands;
use crate::config::Settings;
use crate::feed::LoadState;
use crate::render::html;
use crate::ui;
use anyhow::Context;
use std::path::Path;

pub async fn page(
    settings: &Settings,
    filters: &FilterArgs,
    output: Option<&Path>,
    title: &str,
) -> anyhow::Result<i32> {
    let mut browser = Browser::with_criteria(LoadState::Loading, filters.to_criteria(settings));
    browser.finish_loading(commands::load_feed(settings).await);
    let code = commands::exit_code(browser.state());
    let document = html::page(title, &browser.view());

    match output {
        Some(path) => {
            std::fs::write(path, &document)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ui::success(&format!("Wrote {}", path.display()));
        }
        None => ui::block(&document),
    }

    Ok(code)
}
