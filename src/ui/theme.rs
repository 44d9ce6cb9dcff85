//! Background themes and derived style tokens.
//!
//! The active theme is a member of a closed set. Every theme has an entry in
//! a static definition table; looking a theme up in a table that is missing
//! its entry is a programming error and fails fast. Deriving style tokens
//! from a theme is a pure lookup with no side effects; the applied theme
//! changes only through an explicit set-theme event in the app.

use std::fmt;

use ratatui::style::Color;

/// The closed set of background themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BackgroundTheme {
    #[default]
    Dark,
    Gradient,
    Ocean,
    Sunset,
    Nature,
    Minimal,
    Aurora,
    Cosmic,
    Matrix,
    Neon,
    Forest,
    Galaxy,
    Midnight,
    Snow,
    Marble,
    Cyberpunk,
}

impl BackgroundTheme {
    /// Every theme, in picker order.
    pub const ALL: [BackgroundTheme; 16] = [
        BackgroundTheme::Dark,
        BackgroundTheme::Gradient,
        BackgroundTheme::Ocean,
        BackgroundTheme::Sunset,
        BackgroundTheme::Nature,
        BackgroundTheme::Minimal,
        BackgroundTheme::Aurora,
        BackgroundTheme::Cosmic,
        BackgroundTheme::Matrix,
        BackgroundTheme::Neon,
        BackgroundTheme::Forest,
        BackgroundTheme::Galaxy,
        BackgroundTheme::Midnight,
        BackgroundTheme::Snow,
        BackgroundTheme::Marble,
        BackgroundTheme::Cyberpunk,
    ];

    /// Parse a theme name as found in the settings file.
    ///
    /// Unknown names are user input, not a broken table, so this is a
    /// recoverable `None` rather than a panic.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| option(*t).name.eq_ignore_ascii_case(name))
    }

    /// The canonical name for this theme.
    pub fn name(&self) -> &'static str {
        option(*self).name
    }

    /// The next theme in picker order, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// The previous theme in picker order, wrapping around.
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|t| t == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for BackgroundTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Static definition of a single theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeOption {
    /// The canonical theme name.
    pub name: &'static str,
    /// Whether this theme uses a dark palette.
    pub is_dark: bool,
    /// Human description shown in the theme picker.
    pub description: &'static str,
    /// Whether the original styling animates (decorative only in a TUI).
    pub animated: bool,
    /// Accent color.
    pub accent: Color,
    /// Base surface color.
    pub surface: Color,
}

/// The static theme-definition table. Every `BackgroundTheme` variant must
/// have exactly one row.
pub const THEME_TABLE: &[(BackgroundTheme, ThemeOption)] = &[
    (
        BackgroundTheme::Dark,
        ThemeOption {
            name: "dark",
            is_dark: true,
            description: "Plain dark surfaces",
            animated: false,
            accent: Color::Cyan,
            surface: Color::Black,
        },
    ),
    (
        BackgroundTheme::Gradient,
        ThemeOption {
            name: "gradient",
            is_dark: true,
            description: "Indigo gradient wash",
            animated: true,
            accent: Color::LightMagenta,
            surface: Color::Rgb(30, 27, 75),
        },
    ),
    (
        BackgroundTheme::Ocean,
        ThemeOption {
            name: "ocean",
            is_dark: true,
            description: "Deep sea blues",
            animated: true,
            accent: Color::LightBlue,
            surface: Color::Rgb(12, 34, 56),
        },
    ),
    (
        BackgroundTheme::Sunset,
        ThemeOption {
            name: "sunset",
            is_dark: false,
            description: "Warm orange dusk",
            animated: true,
            accent: Color::LightRed,
            surface: Color::Rgb(255, 237, 213),
        },
    ),
    (
        BackgroundTheme::Nature,
        ThemeOption {
            name: "nature",
            is_dark: false,
            description: "Soft greens",
            animated: false,
            accent: Color::Green,
            surface: Color::Rgb(236, 253, 245),
        },
    ),
    (
        BackgroundTheme::Minimal,
        ThemeOption {
            name: "minimal",
            is_dark: false,
            description: "Plain light surfaces",
            animated: false,
            accent: Color::Blue,
            surface: Color::White,
        },
    ),
    (
        BackgroundTheme::Aurora,
        ThemeOption {
            name: "aurora",
            is_dark: true,
            description: "Northern lights",
            animated: true,
            accent: Color::LightGreen,
            surface: Color::Rgb(15, 23, 42),
        },
    ),
    (
        BackgroundTheme::Cosmic,
        ThemeOption {
            name: "cosmic",
            is_dark: true,
            description: "Starfield violet",
            animated: true,
            accent: Color::Magenta,
            surface: Color::Rgb(24, 16, 48),
        },
    ),
    (
        BackgroundTheme::Matrix,
        ThemeOption {
            name: "matrix",
            is_dark: true,
            description: "Terminal green rain",
            animated: true,
            accent: Color::Green,
            surface: Color::Black,
        },
    ),
    (
        BackgroundTheme::Neon,
        ThemeOption {
            name: "neon",
            is_dark: true,
            description: "Electric pinks",
            animated: true,
            accent: Color::LightMagenta,
            surface: Color::Rgb(20, 10, 30),
        },
    ),
    (
        BackgroundTheme::Forest,
        ThemeOption {
            name: "forest",
            is_dark: true,
            description: "Dense woodland",
            animated: false,
            accent: Color::LightGreen,
            surface: Color::Rgb(12, 32, 21),
        },
    ),
    (
        BackgroundTheme::Galaxy,
        ThemeOption {
            name: "galaxy",
            is_dark: true,
            description: "Spiral nebula",
            animated: true,
            accent: Color::LightCyan,
            surface: Color::Rgb(16, 12, 40),
        },
    ),
    (
        BackgroundTheme::Midnight,
        ThemeOption {
            name: "midnightBlue",
            is_dark: true,
            description: "Midnight navy",
            animated: false,
            accent: Color::Blue,
            surface: Color::Rgb(10, 18, 42),
        },
    ),
    (
        BackgroundTheme::Snow,
        ThemeOption {
            name: "snow",
            is_dark: false,
            description: "Falling snow",
            animated: true,
            accent: Color::Cyan,
            surface: Color::Rgb(248, 250, 252),
        },
    ),
    (
        BackgroundTheme::Marble,
        ThemeOption {
            name: "marble",
            is_dark: false,
            description: "Veined stone",
            animated: false,
            accent: Color::DarkGray,
            surface: Color::Rgb(245, 245, 244),
        },
    ),
    (
        BackgroundTheme::Cyberpunk,
        ThemeOption {
            name: "cyberpunk",
            is_dark: true,
            description: "Neon cityscape",
            animated: true,
            accent: Color::Yellow,
            surface: Color::Rgb(24, 8, 32),
        },
    ),
];

/// Look up a theme in the given definition table.
///
/// # Panics
///
/// Panics if the table has no row for the theme. A missing row means the
/// static table is broken, which is a bug, not a runtime condition to
/// degrade through.
pub fn lookup_in<'a>(
    table: &'a [(BackgroundTheme, ThemeOption)],
    theme: BackgroundTheme,
) -> &'a ThemeOption {
    table
        .iter()
        .find(|(t, _)| *t == theme)
        .map(|(_, opt)| opt)
        .unwrap_or_else(|| panic!("theme {:?} missing from definition table", theme))
}

/// Look up a theme in the bundled definition table.
pub fn option(theme: BackgroundTheme) -> &'static ThemeOption {
    lookup_in(THEME_TABLE, theme)
}

/// Style tokens derived from the active theme, consumed by every screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleTokens {
    /// Whether the palette is dark.
    pub is_dark: bool,
    /// Primary text color.
    pub text: Color,
    /// Secondary/dimmed text color.
    pub text_dim: Color,
    /// Surface (card/panel) background color.
    pub surface: Color,
    /// Border color for inputs and panels.
    pub border: Color,
    /// Accent color for highlights and active controls.
    pub accent: Color,
}

impl StyleTokens {
    /// Derive the token bundle for a theme. Pure; no state is touched.
    pub fn for_theme(theme: BackgroundTheme) -> Self {
        let opt = option(theme);
        if opt.is_dark {
            Self {
                is_dark: true,
                text: Color::Rgb(229, 231, 235),
                text_dim: Color::Rgb(156, 163, 175),
                surface: opt.surface,
                border: Color::Rgb(75, 85, 99),
                accent: opt.accent,
            }
        } else {
            Self {
                is_dark: false,
                text: Color::Rgb(31, 41, 55),
                text_dim: Color::Rgb(107, 114, 128),
                surface: opt.surface,
                border: Color::Rgb(209, 213, 219),
                accent: opt.accent,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_theme_has_a_table_row() {
        for theme in BackgroundTheme::ALL {
            let opt = option(theme);
            assert!(!opt.name.is_empty());
            assert!(!opt.description.is_empty());
        }
    }

    #[test]
    fn test_every_theme_derives_tokens() {
        for theme in BackgroundTheme::ALL {
            let tokens = StyleTokens::for_theme(theme);
            assert_eq!(tokens.is_dark, option(theme).is_dark);
        }
    }

    #[test]
    #[should_panic(expected = "missing from definition table")]
    fn test_broken_table_fails_fast() {
        // A truncated table is a programming error: the lookup must panic,
        // not silently fall back.
        let truncated = &THEME_TABLE[..3];
        lookup_in(truncated, BackgroundTheme::Cyberpunk);
    }

    #[test]
    fn test_from_name_round_trip() {
        for theme in BackgroundTheme::ALL {
            assert_eq!(BackgroundTheme::from_name(theme.name()), Some(theme));
        }
    }

    #[test]
    fn test_from_name_is_case_insensitive() {
        assert_eq!(
            BackgroundTheme::from_name("MIDNIGHTBLUE"),
            Some(BackgroundTheme::Midnight)
        );
    }

    #[test]
    fn test_from_name_unknown_is_none() {
        assert_eq!(BackgroundTheme::from_name("lava-lamp"), None);
    }

    #[test]
    fn test_default_theme_is_dark() {
        assert_eq!(BackgroundTheme::default(), BackgroundTheme::Dark);
        assert!(StyleTokens::for_theme(BackgroundTheme::default()).is_dark);
    }

    #[test]
    fn test_next_prev_cycle() {
        let start = BackgroundTheme::Dark;
        assert_eq!(start.next().prev(), start);
        // Walking the full ring returns to the start.
        let mut theme = start;
        for _ in 0..BackgroundTheme::ALL.len() {
            theme = theme.next();
        }
        assert_eq!(theme, start);
    }
}
