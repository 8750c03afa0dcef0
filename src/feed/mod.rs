// Feed module: the version history document and its one-shot loader

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod http;
pub mod source;

pub use source::FeedSource;

/// One published release and its per-platform download links
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionEntry {
    pub version: String,
    #[serde(default)]
    pub date: String,
    /// Platform key -> download URL
    #[serde(default)]
    pub platforms: BTreeMap<String, String>,
}

/// Top-level feed document
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct VersionFeed {
    #[serde(default)]
    pub versions: Vec<VersionEntry>,
}

impl VersionFeed {
    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Outcome of the single feed load
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Loaded(Vec<VersionEntry>),
    Failed(String),
}

impl LoadState {
    pub fn from_result(result: Result<VersionFeed>) -> Self {
        match result {
            Ok(feed) => LoadState::Loaded(feed.versions),
            Err(err) => {
                let message = format!("{:#}", err);
                if message.trim().is_empty() {
                    LoadState::Failed("Unknown error".to_string())
                } else {
                    LoadState::Failed(message)
                }
            }
        }
    }
}

/// Perform the one fetch and settle into a terminal state
pub async fn load(source: &dyn FeedSource) -> LoadState {
    info!("Loading version history from {}", source.location());
    let state = LoadState::from_result(source.fetch().await);
    match &state {
        LoadState::Loaded(entries) => debug!("Loaded {} version(s)", entries.len()),
        LoadState::Failed(message) => debug!("Feed load failed: {}", message),
        LoadState::Loading => {}
    }
    state
}
