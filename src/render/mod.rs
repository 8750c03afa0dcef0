// Presentation: shared copy for both renderers

use crate::engine::FilterCriteria;

pub mod html;
pub mod terminal;

pub const LOADING_TEXT: &str = "Loading versions...";
pub const ERROR_TITLE: &str = "Error";
pub const EMPTY_TITLE: &str = "No versions found";
pub const EMPTY_HINT: &str = "Try adjusting your search criteria";
pub const NO_DATA_HINT: &str = "No versions available";

/// "Showing N of M versions matching ..." line shown above the cards
pub fn summary(shown: usize, total: usize, criteria: &FilterCriteria) -> String {
    let mut line = format!("Showing {} of {} versions", shown, total);
    if !criteria.query.is_empty() {
        line.push_str(&format!(" matching \"{}\"", criteria.query));
    }
    if let Some(platform) = criteria.platform_filter() {
        line.push_str(&format!(" for {}", platform));
    }
    line
}

/// Hint under the empty panel; the feed being empty only changes the copy
pub fn empty_hint(total: usize) -> &'static str {
    if total == 0 { NO_DATA_HINT } else { EMPTY_HINT }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_plain() {
        assert_eq!(
            summary(3, 10, &FilterCriteria::default()),
            "Showing 3 of 10 versions"
        );
    }

    #[test]
    fn test_summary_with_query_and_platform() {
        let criteria = FilterCriteria {
            query: "1.2".to_string(),
            platform: Some("linux-x64".to_string()),
            ..Default::default()
        };
        assert_eq!(
            summary(1, 10, &criteria),
            "Showing 1 of 10 versions matching \"1.2\" for linux-x64"
        );
    }

    #[test]
    fn test_empty_hint() {
        assert_eq!(empty_hint(0), NO_DATA_HINT);
        assert_eq!(empty_hint(5), EMPTY_HINT);
    }
}
