// Search command: filtered, sorted listing in the terminal

use crate::browser::{Browser, View};
use crate::cli::FilterArgs;
use crate::commands;
use crate::config::Settings;
use crate::feed::LoadState;
use crate::render::terminal;
use crate::ui;
use log::debug;

pub async fn search(settings: &Settings, filters: &FilterArgs, json: bool) -> anyhow::Result<i32> {
    let criteria = filters.to_criteria(settings);
    debug!("Search criteria: {:?}", criteria);

    let mut browser = Browser::with_criteria(LoadState::Loading, criteria);
    browser.finish_loading(commands::load_feed(settings).await);
    let code = commands::exit_code(browser.state());
    let view = browser.view();

    if json {
        match &view {
            View::Failed(message) => ui::error(message),
            View::Results { entries, .. } => ui::block(&serde_json::to_string_pretty(entries)?),
            _ => ui::block("[]"),
        }
    } else {
        ui::block(&terminal::render_view(&view));
    }

    Ok(code)
}
