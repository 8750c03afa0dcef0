// Constants module for shared string constants

/// Remote feed listing every published release
pub const DEFAULT_FEED_URL: &str = "https://raw.githubusercontent.com/oslook/cursor-ai-downloads/refs/heads/main/version-history.json";

/// Public root of the download site, used by the sitemap
pub const DEFAULT_SITE_URL: &str = "https://cursor-download-hub.vercel.app";

pub const CONFIG_FILE: &str = "dlhub.toml";
pub const CONFIG_DIR_ENV: &str = "DLHUB_DIR";
pub const FEED_ENV: &str = "DLHUB_FEED";

pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
pub const SITEMAP_CHANGEFREQ: &str = "daily";
pub const SITEMAP_PRIORITY: &str = "1.0";
pub const SITEMAP_CONTENT_TYPE: &str = "application/xml";
pub const SITEMAP_CACHE_CONTROL: &str = "public, max-age=3600";
