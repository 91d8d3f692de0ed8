// SPDX-License-Identifier: MPL-2.0
//! Centralized styles for the page components.

pub mod button;
pub mod container;

use crate::ui::theming::ColorScheme;
use iced::Theme;

/// Brand color scheme matching the active Iced theme.
pub(crate) fn scheme(theme: &Theme) -> ColorScheme {
    if matches!(theme, Theme::Dark) {
        ColorScheme::dark()
    } else {
        ColorScheme::light()
    }
}
