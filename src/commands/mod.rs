// Command implementations

use crate::config::Settings;
use crate::feed::{self, LoadState};
use crate::ui;

pub mod browse;
pub mod page;
pub mod platforms;
pub mod search;
pub mod sitemap;

/// Exit code for a feed that could not be loaded
pub const EXIT_LOAD_FAILED: i32 = 1;

/// Run the one feed load behind a spinner
pub async fn load_feed(settings: &Settings) -> LoadState {
    let source = feed::source::from_location(&settings.feed);
    let pb = ui::spinner(crate::render::LOADING_TEXT);

    let state = feed::load(source.as_ref()).await;
    match &state {
        LoadState::Loaded(entries) => {
            ui::finish_spinner_success(&pb, &format!("Loaded {} versions", entries.len()))
        }
        LoadState::Failed(_) => ui::finish_spinner_error(&pb, "Failed to load versions"),
        LoadState::Loading => ui::finish_spinner_error(&pb, "Load did not complete"),
    }
    state
}

pub fn exit_code(state: &LoadState) -> i32 {
    match state {
        LoadState::Loaded(_) => 0,
        _ => EXIT_LOAD_FAILED,
    }
}
