// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use super::scheme;
use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Call-to-action button (main instance, documentation, masterdata tools).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);

    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: colors.on_brand,
            border: Border {
                color: colors.brand_secondary,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            ..button::Style::default()
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.brand_secondary)),
            text_color: colors.on_brand,
            border: Border {
                color: colors.brand_primary,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        },
        button::Status::Disabled => disabled_style(&colors.text_secondary),
    }
}

/// Outlined button for the "other instances" row.
///
/// These links have no target yet, so the disabled state is the one usually
/// rendered; it keeps the outline instead of graying the button out.
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);

    let background = match status {
        button::Status::Hovered => Some(Background::Color(colors.surface_secondary)),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            color: colors.outline,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Borderless button used for the theme toggle and the language button.
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..colors.brand_primary
        })),
        _ => None,
    };

    button::Style {
        background,
        text_color: colors.text_primary,
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Entry of the language menu.
pub fn menu_item(theme: &Theme, status: button::Status) -> button::Style {
    let colors = scheme(theme);

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(colors.surface_secondary)),
            text_color: colors.brand_primary,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..button::Style::default()
        },
        button::Status::Pressed => button::Style {
            background: Some(Background::Color(colors.brand_primary)),
            text_color: colors.on_brand,
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..button::Style::default()
        },
        button::Status::Active | button::Status::Disabled => button::Style {
            background: None,
            text_color: colors.text_primary,
            border: Border::default(),
            ..button::Style::default()
        },
    }
}

fn disabled_style(text_color: &Color) -> button::Style {
    button::Style {
        background: None,
        text_color: Color {
            a: opacity::OVERLAY_STRONG,
            ..*text_color
        },
        border: Border {
            color: *text_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
