// Filter/sort engine: pure derivation of the visible sequence

use crate::feed::VersionEntry;
use clap::ValueEnum;
use serde::Deserialize;
use std::cmp::Ordering;
use std::fmt;

pub mod date_order;
pub mod version_order;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Version,
    Date,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
pub enum SortDirection {
    #[value(name = "asc", alias = "ascending")]
    #[serde(rename = "asc", alias = "ascending")]
    Ascending,
    #[default]
    #[value(name = "desc", alias = "descending")]
    #[serde(rename = "desc", alias = "descending")]
    Descending,
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortField::Version => write!(f, "version"),
            SortField::Date => write!(f, "date"),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => write!(f, "asc"),
            SortDirection::Descending => write!(f, "desc"),
        }
    }
}

/// The user's current search configuration. Always replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the version label
    pub query: String,
    /// Exact platform key an entry must offer
    pub platform: Option<String>,
    pub sort_field: SortField,
    pub sort_direction: SortDirection,
}

impl FilterCriteria {
    /// Platform filter, with an empty key meaning "all platforms"
    pub fn platform_filter(&self) -> Option<&str> {
        self.platform.as_deref().filter(|p| !p.is_empty())
    }

    pub fn matches(&self, entry: &VersionEntry) -> bool {
        let matches_query = entry
            .version
            .to_lowercase()
            .contains(&self.query.to_lowercase());
        let matches_platform = self
            .platform_filter()
            .is_none_or(|key| entry.platforms.contains_key(key));
        matches_query && matches_platform
    }

    fn compare(&self, a: &VersionEntry, b: &VersionEntry) -> Ordering {
        let ord = match self.sort_field {
            SortField::Version => version_order::compare_versions(&a.version, &b.version),
            SortField::Date => date_order::compare_dates(&a.date, &b.date),
        };
        match self.sort_direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    }
}

/// Filter and sort `entries` according to `criteria`.
///
/// The result is a subset of the input; ties keep their input order.
pub fn derive(entries: &[VersionEntry], criteria: &FilterCriteria) -> Vec<VersionEntry> {
    let mut filtered: Vec<VersionEntry> = entries
        .iter()
        .filter(|entry| criteria.matches(entry))
        .cloned()
        .collect();

    filtered.sort_by(|a, b| criteria.compare(a, b));
    filtered
}
