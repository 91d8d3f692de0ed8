// SPDX-License-Identifier: MPL-2.0
//! Centralized module for the page's SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`, so every call shares the same parsed data.
//!
//! Glyph icons are drawn with `currentColor`; callers tint them with
//! [`themed`] so they follow the active theme. The logo keeps its own colors.

use iced::widget::svg::{self, Handle, Svg};
use iced::{Length, Theme};
use std::sync::OnceLock;

use crate::ui::styles;
use crate::ui::theming::ThemeMode;

/// Macro to define an icon function with a cached handle.
macro_rules! define_icon {
    ($name:ident, $path:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name<'a>() -> Svg<'a> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] =
                include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/", $path));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(sun, "icons/sun.svg", "Sun icon: shown while the light theme is active.");
define_icon!(moon, "icons/moon.svg", "Moon icon: shown while the dark theme is active.");
define_icon!(globe, "icons/globe.svg", "Globe icon: language selector.");
define_icon!(logo, "branding/datastore_logo.svg", "Data Store project logo.");

/// Raw logo bytes, also used for the window icon.
pub const LOGO_SVG: &[u8] = include_bytes!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/branding/datastore_logo.svg"
));

/// Which glyph the theme toggle displays.
///
/// The toggle shows the theme that is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeGlyph {
    Sun,
    Moon,
}

impl ThemeGlyph {
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => ThemeGlyph::Sun,
            ThemeMode::Dark => ThemeGlyph::Moon,
        }
    }

    #[must_use]
    pub fn icon<'a>(self) -> Svg<'a> {
        match self {
            ThemeGlyph::Sun => sun(),
            ThemeGlyph::Moon => moon(),
        }
    }
}

/// Resize an icon to a square of `size` pixels.
pub fn sized(icon: Svg<'_>, size: f32) -> Svg<'_> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}

/// Paint a `currentColor` icon with the active theme's text color.
pub fn themed(icon: Svg<'_>) -> Svg<'_> {
    icon.style(|theme: &Theme, _status: svg::Status| svg::Style {
        color: Some(styles::scheme(theme).text_primary),
    })
}
