use crate::icon_color::IconColor;
use serde::Deserialize;
use serde::Serialize;
use std::env;

/// Presentation settings for the whole site.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SitePrefs {
    title: String,
    background: IconColor,
}

impl SitePrefs {
    const DEFAULT_TITLE: &'static str = "Portfolio";
    const DEFAULT_BACKGROUND: IconColor = IconColor::rgb(0x1b, 0x20, 0x30);

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn background(&self) -> IconColor {
        self.background
    }

    /// Creates a SitePrefs instance from environment variables,
    /// with in-code defaults.
    ///
    /// # Environment Variables
    /// - `SITE_TITLE`: the page and header title. defaults to "Portfolio".
    /// - `DESKTOP_BACKGROUND`: desktop colour as `#rrggbb` or `#rgb`.
    ///   Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SitePrefs::from_env`], reading variables through `lookup`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let title = lookup("SITE_TITLE")
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_TITLE.to_owned());

        let background = match lookup("DESKTOP_BACKGROUND") {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                dioxus_logger::tracing::warn!(
                    "ignoring DESKTOP_BACKGROUND={:?}: {}",
                    raw,
                    e
                );
                Self::DEFAULT_BACKGROUND
            }),
            None => Self::DEFAULT_BACKGROUND,
        };

        Self { title, background }
    }
}

impl Default for SitePrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn prefs_with(vars: &[(&str, &str)]) -> SitePrefs {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SitePrefs::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_unset() {
        let prefs = prefs_with(&[]);
        assert_eq!(prefs.title(), "Portfolio");
        assert_eq!(prefs.background(), SitePrefs::DEFAULT_BACKGROUND);
    }

    #[test]
    fn reads_overrides() {
        let prefs = prefs_with(&[("SITE_TITLE", "  Jane Doe "), ("DESKTOP_BACKGROUND", "#223344")]);
        assert_eq!(prefs.title(), "Jane Doe");
        assert_eq!(prefs.background(), IconColor::rgb(0x22, 0x33, 0x44));
    }

    #[test]
    fn blank_title_and_bad_colour_fall_back() {
        let prefs = prefs_with(&[("SITE_TITLE", "   "), ("DESKTOP_BACKGROUND", "teal")]);
        assert_eq!(prefs.title(), "Portfolio");
        assert_eq!(prefs.background(), SitePrefs::DEFAULT_BACKGROUND);
    }
}
