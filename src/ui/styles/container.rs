// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use super::scheme;
use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Whole-page background.
pub fn page(theme: &Theme) -> container::Style {
    let colors = scheme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        ..Default::default()
    }
}

/// Header and footer bars.
pub fn bar(theme: &Theme) -> container::Style {
    let colors = scheme(theme);
    let base = colors.surface_secondary;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.outline,
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}

/// Dropdown surface of the language menu.
pub fn menu(theme: &Theme) -> container::Style {
    let colors = scheme(theme);

    container::Style {
        background: Some(Background::Color(colors.surface_primary)),
        text_color: Some(colors.text_primary),
        border: Border {
            color: colors.outline,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Secondary text, e.g. the footer description.
pub fn muted(theme: &Theme) -> container::Style {
    let colors = scheme(theme);

    container::Style {
        text_color: Some(colors.text_secondary),
        ..Default::default()
    }
}
