// Trait definition for feed sources

use crate::feed::VersionFeed;
use crate::feed::http;
use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use std::path::PathBuf;

/// Anything that can produce the version feed document
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed. Called at most once per load.
    async fn fetch(&self) -> Result<VersionFeed>;

    /// Human-readable location, used in logs and messages
    fn location(&self) -> String;
}

/// Remote feed fetched with a single GET request
pub struct HttpFeed {
    url: String,
}

impl HttpFeed {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[async_trait]
impl FeedSource for HttpFeed {
    async fn fetch(&self) -> Result<VersionFeed> {
        debug!("GET {}", self.url);
        http::fetch_json(&self.url).await
    }

    fn location(&self) -> String {
        self.url.clone()
    }
}

/// Feed document stored on the local filesystem
pub struct FileFeed {
    path: PathBuf,
}

impl FileFeed {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl FeedSource for FileFeed {
    async fn fetch(&self) -> Result<VersionFeed> {
        debug!("Reading feed from {}", self.path.display());
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        VersionFeed::parse(&text)
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}

/// Pick the source implementation for a configured feed location
pub fn from_location(location: &str) -> Box<dyn FeedSource> {
    if http::is_remote(location) {
        Box::new(HttpFeed::new(location))
    } else {
        let path = location.strip_prefix("file://").unwrap_or(location);
        Box::new(FileFeed::new(path))
    }
}
