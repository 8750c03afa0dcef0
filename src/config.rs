// Config module: built-in defaults < dlhub.toml < DLHUB_FEED < --feed

use crate::constants;
use crate::engine::{SortDirection, SortField};
use anyhow::Context;
use log::debug;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub fn config_dir() -> String {
    std::env::var(constants::CONFIG_DIR_ENV).unwrap_or_else(|_| ".".to_string())
}

pub fn config_path() -> PathBuf {
    Path::new(&config_dir()).join(constants::CONFIG_FILE)
}

/// Optional settings file; every key may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub feed: Option<String>,
    pub site: Option<String>,
    pub default_sort: Option<SortField>,
    pub default_order: Option<SortDirection>,
}

impl FileConfig {
    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Missing file is fine, a malformed one is not
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Invalid config file {}", path.display()))
    }
}

/// Effective settings after all layers are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub feed: String,
    pub site: String,
    pub default_sort: SortField,
    pub default_order: SortDirection,
}

impl Settings {
    pub fn resolve(file: FileConfig, env_feed: Option<String>, flag_feed: Option<String>) -> Self {
        let feed = flag_feed
            .or(env_feed)
            .or(file.feed)
            .unwrap_or_else(|| constants::DEFAULT_FEED_URL.to_string());

        Self {
            feed,
            site: file
                .site
                .unwrap_or_else(|| constants::DEFAULT_SITE_URL.to_string()),
            default_sort: file.default_sort.unwrap_or_default(),
            default_order: file.default_order.unwrap_or_default(),
        }
    }

    pub fn load(flag_feed: Option<String>) -> anyhow::Result<Self> {
        let file = FileConfig::load(&config_path())?;
        let env_feed = std::env::var(constants::FEED_ENV)
            .ok()
            .filter(|v| !v.is_empty());
        let settings = Self::resolve(file, env_feed, flag_feed);
        debug!("Resolved settings: {:?}", settings);
        Ok(settings)
    }
}
