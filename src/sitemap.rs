// Sitemap generation for the download site

use crate::constants;
use crate::render::html::escape;
use chrono::{DateTime, SecondsFormat, Utc};

/// Sitemap body plus the headers it should be served with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapResponse {
    pub content_type: &'static str,
    pub cache_control: &'static str,
    pub body: String,
}

/// Build the XML document listing the site root
pub fn build(site: &str, now: DateTime<Utc>) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="{ns}">
  <url>
    <loc>{loc}</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>{changefreq}</changefreq>
    <priority>{priority}</priority>
  </url>
</urlset>
"#,
        ns = constants::SITEMAP_NAMESPACE,
        loc = escape(site),
        lastmod = now.to_rfc3339_opts(SecondsFormat::Millis, true),
        changefreq = constants::SITEMAP_CHANGEFREQ,
        priority = constants::SITEMAP_PRIORITY,
    )
}

pub fn response(site: &str, now: DateTime<Utc>) -> SitemapResponse {
    SitemapResponse {
        content_type: constants::SITEMAP_CONTENT_TYPE,
        cache_control: constants::SITEMAP_CACHE_CONTROL,
        body: build(site, now),
    }
}
