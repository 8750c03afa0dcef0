// Sitemap command

use crate::config::Settings;
use crate::sitemap;
use crate::ui;

pub fn sitemap(settings: &Settings, headers: bool) -> anyhow::Result<()> {
    let response = sitemap::response(&settings.site, chrono::Utc::now());

    if headers {
        ui::block(&format!("Content-Type: {}", response.content_type));
        ui::block(&format!("Cache-Control: {}", response.cache_control));
        ui::block("");
    }
    ui::block(response.body.trim_end());
    Ok(())
}
