// Static HTML rendering of the version list

use crate::browser::View;
use crate::engine::FilterCriteria;
use crate::feed::VersionEntry;
use crate::highlight;
use crate::platform;
use crate::render;

const STYLE: &str = r#"
body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #111827; }
.summary { margin-bottom: 1.5rem; padding: 1rem; background: #f9fafb; border: 1px solid #e5e7eb; border-radius: 0.5rem; font-size: 0.875rem; }
.version-card { border: 1px solid #e5e7eb; border-radius: 0.75rem; padding: 1.5rem; margin-bottom: 1rem; }
.version-header { display: flex; justify-content: space-between; align-items: center; margin-bottom: 1.25rem; }
.version-date { color: #6b7280; font-size: 0.875rem; }
.platforms-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(250px, 1fr)); gap: 0.75rem; }
.platform-link { display: flex; gap: 0.75rem; padding: 0.75rem; border: 1px solid #e5e7eb; border-radius: 0.5rem; text-decoration: none; color: inherit; }
.platform-badge { font-size: 0.75rem; color: #6b7280; background: #e5e7eb; border-radius: 0.25rem; padding: 0.125rem 0.5rem; }
.panel { padding: 3rem; text-align: center; border: 1px solid #e5e7eb; border-radius: 0.75rem; }
.panel.error { background: #fee2e2; border-color: #fca5a5; color: #991b1b; }
mark { background-color: #fef08a; padding: 0 0.125rem; border-radius: 0.125rem; }
"#;

/// Escape text for use in element content and double-quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Version label with query matches wrapped in `<mark>`
pub fn highlighted(label: &str, query: &str) -> String {
    highlight::segments(label, query)
        .iter()
        .map(|segment| {
            if segment.is_match {
                format!("<mark>{}</mark>", escape(segment.text))
            } else {
                escape(segment.text)
            }
        })
        .collect()
}

fn platform_link(key: &str, url: &str) -> String {
    let info = platform::describe(key);
    format!(
        r#"<a class="platform-link" href="{url}" target="_blank" rel="noopener noreferrer"><span class="platform-icon {icon}"></span><span class="platform-info"><span class="platform-name">{name}</span> <span class="platform-badge">{key}</span></span></a>"#,
        url = escape(url),
        icon = info.icon.css_class(),
        name = escape(info.name),
        key = escape(key),
    )
}

pub fn card(entry: &VersionEntry, query: &str) -> String {
    let links: Vec<String> = entry
        .platforms
        .iter()
        .map(|(key, url)| platform_link(key, url))
        .collect();

    format!(
        "<div class=\"version-card\">\n<div class=\"version-header\"><h3 class=\"version-title\">{title}</h3><span class=\"version-date\">{date}</span></div>\n<div class=\"platforms-grid\">\n{links}\n</div>\n</div>",
        title = highlighted(&entry.version, query),
        date = escape(&entry.date),
        links = links.join("\n"),
    )
}

fn panel(class: &str, title: &str, body: &str) -> String {
    format!(
        "<div class=\"panel {class}\"><h3>{}</h3><p>{}</p></div>",
        escape(title),
        escape(body)
    )
}

fn summary_block(shown: usize, total: usize, criteria: &FilterCriteria) -> String {
    format!(
        "<div class=\"summary\"><p>{}</p></div>",
        escape(&render::summary(shown, total, criteria))
    )
}

/// Body markup for the current view
pub fn body(view: &View<'_>) -> String {
    match view {
        View::Loading => panel("loading", render::LOADING_TEXT, ""),
        View::Failed(message) => panel("error", render::ERROR_TITLE, message),
        View::Empty { total, criteria } => format!(
            "{}\n{}",
            summary_block(0, *total, criteria),
            panel("empty", render::EMPTY_TITLE, render::empty_hint(*total))
        ),
        View::Results {
            total,
            entries,
            criteria,
        } => {
            let cards: Vec<String> = entries
                .iter()
                .map(|entry| card(entry, &criteria.query))
                .collect();
            format!(
                "{}\n{}",
                summary_block(entries.len(), *total, criteria),
                cards.join("\n")
            )
        }
    }
}

/// Complete standalone HTML document
pub fn page(title: &str, view: &View<'_>) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n<title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
        title = escape(title),
        body = body(view),
    )
}
