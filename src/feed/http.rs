// Shared HTTP client utilities

use anyhow::Result;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

/// User-Agent string for all HTTP requests
const USER_AGENT: &str = concat!("dlhub/", env!("CARGO_PKG_VERSION"));

lazy_static::lazy_static! {
    /// Shared HTTP client with proper User-Agent
    static ref CLIENT: Client = Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new());
}

/// Fetch JSON from a URL and deserialize it
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response: Response = CLIENT.get(url).send().await?;
    check_status(response.status(), url)?;

    let result = response.json().await?;
    Ok(result)
}

/// Reject anything outside the 2xx range
pub fn check_status(status: StatusCode, url: &str) -> Result<()> {
    if status == StatusCode::NOT_FOUND {
        anyhow::bail!("Feed not found: {}", url);
    }

    if !status.is_success() {
        anyhow::bail!("Failed to load version history: {} ({})", url, status);
    }

    Ok(())
}

/// True for locations that should go over the network
pub fn is_remote(location: &str) -> bool {
    let lower = location.to_ascii_lowercase();
    lower.starts_with("https://") || lower.starts_with("http://")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_status_passes() {
        assert!(check_status(StatusCode::OK, "https://example.com/feed.json").is_ok());
        assert!(check_status(StatusCode::NO_CONTENT, "https://example.com/feed.json").is_ok());
    }

    #[test]
    fn test_not_found_is_error() {
        let err = check_status(StatusCode::NOT_FOUND, "https://example.com/feed.json")
            .unwrap_err()
            .to_string();
        assert!(err.contains("not found"));
        assert!(err.contains("https://example.com/feed.json"));
    }

    #[test]
    fn test_server_error_mentions_status() {
        let err = check_status(StatusCode::BAD_GATEWAY, "https://example.com/feed.json")
            .unwrap_err()
            .to_string();
        assert!(err.contains("502"));
    }

    #[test]
    fn test_is_remote() {
        assert!(is_remote("https://example.com/feed.json"));
        assert!(is_remote("HTTP://example.com/feed.json"));
        assert!(!is_remote("./fixtures/feed.json"));
        assert!(!is_remote("/tmp/https.json"));
    }
}
