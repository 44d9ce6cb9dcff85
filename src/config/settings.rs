//! Application settings.

use serde::{Deserialize, Serialize};

use crate::ui::theme::BackgroundTheme;

/// How the member list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One row per member.
    Table,
    /// One card per member.
    #[default]
    Grid,
}

impl ViewMode {
    /// Toggle between the two modes.
    pub fn toggled(&self) -> Self {
        match self {
            ViewMode::Table => ViewMode::Grid,
            ViewMode::Grid => ViewMode::Table,
        }
    }

    /// Display label for the status bar.
    pub fn display(&self) -> &'static str {
        match self {
            ViewMode::Table => "Table View",
            ViewMode::Grid => "Grid View",
        }
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// The background theme name to start with.
    pub theme: String,
    /// The member-list view mode to start with.
    pub view_mode: ViewMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: BackgroundTheme::default().name().to_string(),
            view_mode: ViewMode::default(),
        }
    }
}

impl Settings {
    /// Resolve the configured theme name against the closed theme set.
    ///
    /// Unknown names fall back to the default theme; the name came from a
    /// user-editable file, so this is recoverable, not a broken table.
    pub fn background_theme(&self) -> BackgroundTheme {
        BackgroundTheme::from_name(&self.theme).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.theme, "dark");
        assert_eq!(settings.view_mode, ViewMode::Grid);
    }

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::Table);
        assert_eq!(ViewMode::Table.toggled(), ViewMode::Grid);
    }

    #[test]
    fn test_background_theme_resolution() {
        let settings = Settings {
            theme: "ocean".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.background_theme(), BackgroundTheme::Ocean);
    }

    #[test]
    fn test_unknown_theme_falls_back_to_default() {
        let settings = Settings {
            theme: "plaid".to_string(),
            ..Settings::default()
        };
        assert_eq!(settings.background_theme(), BackgroundTheme::Dark);
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let settings = Settings {
            theme: "sunset".to_string(),
            view_mode: ViewMode::Table,
        };
        let toml_str = toml::to_string(&settings).unwrap();
        let back: Settings = toml::from_str(&toml_str).unwrap();
        assert_eq!(back, settings);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: Settings = toml::from_str("theme = \"matrix\"").unwrap();
        assert_eq!(settings.background_theme(), BackgroundTheme::Matrix);
        assert_eq!(settings.view_mode, ViewMode::Grid);
    }
}
