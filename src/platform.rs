// Platform key lookup: display names and icon categories

/// Icon family shown next to a download link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    Monitor,
    Apple,
    Terminal,
    Default,
}

impl IconKind {
    /// Glyph used by the terminal renderer
    pub fn glyph(&self) -> &'static str {
        match self {
            IconKind::Monitor => "🖥",
            IconKind::Apple => "⌘",
            IconKind::Terminal => ">_",
            IconKind::Default => "⬇",
        }
    }

    /// CSS class suffix used by the HTML renderer
    pub fn css_class(&self) -> &'static str {
        match self {
            IconKind::Monitor => "icon-monitor",
            IconKind::Apple => "icon-apple",
            IconKind::Terminal => "icon-terminal",
            IconKind::Default => "icon-default",
        }
    }
}

/// Known platform keys and their display names
const PLATFORM_NAMES: &[(&str, &str)] = &[
    ("win32-x64-user", "Windows x64 (User)"),
    ("win32-arm64-user", "Windows ARM64 (User)"),
    ("win32-x64-system", "Windows x64 (System)"),
    ("win32-arm64-system", "Windows ARM64 (System)"),
    ("win32-x64", "Windows x64"),
    ("win32-arm64", "Windows ARM64"),
    ("darwin-universal", "macOS Universal"),
    ("darwin-x64", "macOS Intel"),
    ("darwin-arm64", "macOS Apple Silicon"),
    ("linux-x64", "Linux x64"),
    ("linux-arm64", "Linux ARM64"),
];

/// Key prefix -> icon family, first match wins
const ICON_PREFIXES: &[(&str, IconKind)] = &[
    ("win32", IconKind::Monitor),
    ("darwin", IconKind::Apple),
    ("linux", IconKind::Terminal),
];

/// Platform keys offered as filter choices
pub const FILTER_CHOICES: &[&str] = &[
    "win32-x64",
    "win32-arm64",
    "darwin-universal",
    "darwin-x64",
    "darwin-arm64",
    "linux-x64",
    "linux-arm64",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformInfo<'a> {
    pub key: &'a str,
    pub name: &'a str,
    pub icon: IconKind,
}

/// Friendly name for a key, or the raw key when unknown
pub fn display_name(key: &str) -> &str {
    PLATFORM_NAMES
        .iter()
        .find(|(known, _)| *known == key)
        .map(|(_, name)| *name)
        .unwrap_or(key)
}

pub fn icon_for(key: &str) -> IconKind {
    ICON_PREFIXES
        .iter()
        .find(|(prefix, _)| key.starts_with(prefix))
        .map(|(_, icon)| *icon)
        .unwrap_or(IconKind::Default)
}

pub fn describe(key: &str) -> PlatformInfo<'_> {
    PlatformInfo {
        key,
        name: display_name(key),
        icon: icon_for(key),
    }
}

/// Every key with a known display name
pub fn known_keys() -> impl Iterator<Item = &'static str> {
    PLATFORM_NAMES.iter().map(|(key, _)| *key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_names() {
        assert_eq!(display_name("win32-x64-user"), "Windows x64 (User)");
        assert_eq!(display_name("darwin-arm64"), "macOS Apple Silicon");
        assert_eq!(display_name("linux-arm64"), "Linux ARM64");
    }

    #[test]
    fn test_unknown_key_falls_back_to_raw() {
        assert_eq!(display_name("freebsd-x64"), "freebsd-x64");
        assert_eq!(display_name(""), "");
    }

    #[test]
    fn test_icon_by_prefix() {
        assert_eq!(icon_for("win32-arm64-system"), IconKind::Monitor);
        assert_eq!(icon_for("darwin-universal"), IconKind::Apple);
        assert_eq!(icon_for("linux-x64"), IconKind::Terminal);
        assert_eq!(icon_for("freebsd-x64"), IconKind::Default);
        assert_eq!(icon_for("x-linux"), IconKind::Default);
    }

    #[test]
    fn test_describe() {
        let info = describe("darwin-x64");
        assert_eq!(info.key, "darwin-x64");
        assert_eq!(info.name, "macOS Intel");
        assert_eq!(info.icon, IconKind::Apple);
    }

    #[test]
    fn test_filter_choices_are_known() {
        let known: Vec<_> = known_keys().collect();
        for choice in FILTER_CHOICES {
            assert!(known.contains(choice), "{choice} has no display name");
        }
        assert_eq!(known.len(), 11);
    }
}
