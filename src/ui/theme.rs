//! Color theming for the portfolio UI.
//!
//! Every view draws exclusively through a [`Palette`] resolved from the
//! current [`ThemeMode`], so flipping the mode restyles the whole
//! application consistently without touching any view state.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// The persisted light/dark display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    /// The site ships dark-first; keep that default here.
    #[default]
    Dark,
}

impl ThemeMode {
    /// The other mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    /// Label shown in the header next to the toggle hint.
    pub fn label(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Concrete color set for one theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Whole-frame background
    pub bg: Color,
    /// Card/panel background
    pub surface: Color,
    /// Default border color
    pub border: Color,
    /// Border color for the focused element
    pub border_focus: Color,
    /// Body text
    pub text: Color,
    /// De-emphasized text (hints, dates, captions)
    pub text_dim: Color,
    /// Section headings
    pub heading: Color,
    /// Primary accent (brand, active tab, links)
    pub accent: Color,
    /// Secondary accent used for gradient-style pairings
    pub accent_alt: Color,
    /// Success banner text
    pub success: Color,
    /// Error modal border and text
    pub error: Color,
    /// Background of text inputs
    pub input_bg: Color,
}

/// Dark palette, matching the site's gray-900 scheme.
const DARK: Palette = Palette {
    bg: Color::Rgb(17, 24, 39),
    surface: Color::Rgb(31, 41, 55),
    border: Color::Rgb(55, 65, 81),
    border_focus: Color::Rgb(96, 165, 250),
    text: Color::Rgb(229, 231, 235),
    text_dim: Color::Rgb(156, 163, 175),
    heading: Color::Rgb(243, 244, 246),
    accent: Color::Rgb(96, 165, 250),
    accent_alt: Color::Rgb(192, 132, 252),
    success: Color::Rgb(74, 222, 128),
    error: Color::Rgb(248, 113, 113),
    input_bg: Color::Rgb(24, 32, 48),
};

/// Light palette, matching the site's gray-50 scheme.
const LIGHT: Palette = Palette {
    bg: Color::Rgb(249, 250, 251),
    surface: Color::Rgb(255, 255, 255),
    border: Color::Rgb(209, 213, 219),
    border_focus: Color::Rgb(37, 99, 235),
    text: Color::Rgb(31, 41, 55),
    text_dim: Color::Rgb(107, 114, 128),
    heading: Color::Rgb(17, 24, 39),
    accent: Color::Rgb(37, 99, 235),
    accent_alt: Color::Rgb(147, 51, 234),
    success: Color::Rgb(22, 163, 74),
    error: Color::Rgb(220, 38, 38),
    input_bg: Color::Rgb(243, 244, 246),
};

impl Palette {
    /// Resolve the palette for a theme mode.
    pub fn of(mode: ThemeMode) -> &'static Palette {
        match mode {
            ThemeMode::Light => &LIGHT,
            ThemeMode::Dark => &DARK,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggled_is_an_involution() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled().toggled(), ThemeMode::Light);
    }

    #[test]
    fn default_mode_is_dark() {
        assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    }

    #[test]
    fn palettes_differ_in_every_role_that_flips() {
        let light = Palette::of(ThemeMode::Light);
        let dark = Palette::of(ThemeMode::Dark);
        assert_ne!(light.bg, dark.bg);
        assert_ne!(light.surface, dark.surface);
        assert_ne!(light.text, dark.text);
        assert_ne!(light.heading, dark.heading);
        assert_ne!(light.input_bg, dark.input_bg);
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&ThemeMode::Dark).unwrap(), "\"dark\"");
        let parsed: ThemeMode = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, ThemeMode::Light);
    }
}
