// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme mode and the session state that owns it.
//!
//! [`ThemeState`] is the single owner of the current mode. It starts in
//! [`ThemeMode::Light`] and [`ThemeState::toggle`] is its only mutator; the
//! rest of the UI reads the mode through [`ThemeState::mode`]. Nothing is
//! persisted, so every session starts light.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};

/// Color palette for a theme mode.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surface colors
    pub surface_primary: Color,
    pub surface_secondary: Color,

    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,

    // Brand colors
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub on_brand: Color,

    // Secondary buttons
    pub outline: Color,
}

impl ColorScheme {
    /// Light theme (Light mode).
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_50,

            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_700,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,
            on_brand: palette::WHITE,

            outline: palette::GRAY_200,
        }
    }

    /// Dark theme (Dark mode).
    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::GRAY_950,
            surface_secondary: palette::GRAY_900,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_200,

            brand_primary: palette::PRIMARY_400,
            brand_secondary: palette::PRIMARY_200,
            on_brand: palette::GRAY_950,

            outline: palette::GRAY_800,
        }
    }
}

/// Visual mode of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The other mode.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, ThemeMode::Dark)
    }

    #[must_use]
    pub fn colors(self) -> ColorScheme {
        match self {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
        }
    }

    /// Built-in Iced theme used for widget defaults.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        match self {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }
}

/// Session-scoped owner of the theme mode.
#[derive(Debug, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    /// Flips the mode and returns the new one.
    pub fn toggle(&mut self) -> ThemeMode {
        self.mode = self.mode.toggled();
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_starts_light() {
        assert_eq!(ThemeState::new().mode(), ThemeMode::Light);
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_to_complement() {
        let mut state = ThemeState::new();
        assert_eq!(state.toggle(), ThemeMode::Dark);
        assert_eq!(state.mode(), ThemeMode::Dark);
        assert_eq!(state.toggle(), ThemeMode::Light);
    }

    #[test]
    fn toggled_is_involutive() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_themes_have_same_brand_hue() {
        let light = ColorScheme::light();
        let dark = ColorScheme::dark();
        assert!(light.brand_primary.b > light.brand_primary.r);
        assert!(dark.brand_primary.b > dark.brand_primary.r);
    }

    #[test]
    fn iced_theme_follows_mode() {
        assert!(matches!(ThemeMode::Light.iced_theme(), Theme::Light));
        assert!(matches!(ThemeMode::Dark.iced_theme(), Theme::Dark));
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}
