// Terminal rendering of the version list

use crate::browser::View;
use crate::feed::VersionEntry;
use crate::highlight;
use crate::platform;
use crate::render;
use console::style;

/// Version label with matches emphasised
pub fn highlighted(label: &str, query: &str) -> String {
    highlight::segments(label, query)
        .iter()
        .map(|segment| {
            if segment.is_match {
                style(segment.text).yellow().bold().underlined().to_string()
            } else {
                style(segment.text).bold().to_string()
            }
        })
        .collect()
}

pub fn card(entry: &VersionEntry, query: &str) -> String {
    let mut lines = vec![format!(
        "{} {}",
        highlighted(&entry.version, query),
        style(&entry.date).dim()
    )];

    for (key, url) in &entry.platforms {
        let info = platform::describe(key);
        lines.push(format!(
            "  {} {} {} {}",
            info.icon.glyph(),
            info.name,
            style(format!("[{}]", key)).dim(),
            style(url).cyan()
        ));
    }

    lines.join("\n")
}

/// Full text for the current view
pub fn render_view(view: &View<'_>) -> String {
    match view {
        View::Loading => render::LOADING_TEXT.to_string(),
        View::Failed(message) => format!(
            "{} {}\n{}",
            style("✗").red(),
            style(render::ERROR_TITLE).red().bold(),
            message
        ),
        View::Empty { total, criteria } => format!(
            "{}\n\n{}\n{}",
            style(render::summary(0, *total, criteria)).dim(),
            style(render::EMPTY_TITLE).bold(),
            render::empty_hint(*total)
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
                "{}\n\n{}",
                style(render::summary(entries.len(), *total, criteria)).dim(),
                cards.join("\n\n")
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FilterCriteria;
    use std::collections::BTreeMap;

    fn strip(text: &str) -> String {
        console::strip_ansi_codes(text).to_string()
    }

    #[test]
    fn test_card_lists_platforms_with_names() {
        let mut platforms = BTreeMap::new();
        platforms.insert("win32-x64-user".to_string(), "https://dl/win".to_string());
        platforms.insert("weird-key".to_string(), "https://dl/weird".to_string());
        let entry = VersionEntry {
            version: "0.50.5".to_string(),
            date: "2025-05-20".to_string(),
            platforms,
        };

        let text = strip(&card(&entry, "50"));
        assert!(text.starts_with("0.50.5 2025-05-20"));
        assert!(text.contains("Windows x64 (User) [win32-x64-user] https://dl/win"));
        assert!(text.contains("weird-key [weird-key] https://dl/weird"));
    }

    #[test]
    fn test_highlight_keeps_label_text() {
        assert_eq!(strip(&highlighted("1.10.0", "10")), "1.10.0");
    }

    #[test]
    fn test_render_empty_and_failed() {
        let criteria = FilterCriteria::default();
        let text = strip(&render_view(&View::Empty {
            total: 0,
            criteria: &criteria,
        }));
        assert!(text.contains(render::EMPTY_TITLE));
        assert!(text.contains(render::NO_DATA_HINT));

        let text = strip(&render_view(&View::Failed("HTTP request failed")));
        assert!(text.contains("Error"));
        assert!(text.contains("HTTP request failed"));
    }
}
