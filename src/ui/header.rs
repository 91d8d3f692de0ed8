// SPDX-License-Identifier: MPL-2.0
//! Header bar: project logo, contact label and the theme toggle.

use crate::fonts;
use crate::i18n::{keys, MessageCatalog};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons::{self, ThemeGlyph};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, tooltip, Container, Row, Text},
    Element, Length,
};

/// Localized content of the header.
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderModel {
    pub logo_alt: String,
    pub contact: String,
    pub glyph: ThemeGlyph,
    /// Describes what pressing the toggle does.
    pub toggle_tooltip: String,
}

impl HeaderModel {
    #[must_use]
    pub fn new(catalog: &MessageCatalog, theme: ThemeMode) -> Self {
        let toggle_key = match theme {
            ThemeMode::Light => keys::THEME_TOGGLE_TO_DARK,
            ThemeMode::Dark => keys::THEME_TOGGLE_TO_LIGHT,
        };

        Self {
            logo_alt: catalog.tr(keys::LOGO_ALT),
            contact: catalog.tr(keys::CONTACT),
            glyph: ThemeGlyph::for_mode(theme),
            toggle_tooltip: catalog.tr(toggle_key),
        }
    }
}

/// Messages emitted by the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleTheme,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    ToggleTheme,
}

#[must_use]
pub fn update(message: &Message) -> Event {
    match message {
        Message::ToggleTheme => Event::ToggleTheme,
    }
}

/// Render the header bar.
pub fn view<'a>(model: HeaderModel) -> Element<'a, Message> {
    let logo = tooltip(
        icons::sized(icons::logo(), sizing::LOGO),
        Text::new(model.logo_alt).size(typography::CAPTION),
        tooltip::Position::Bottom,
    );

    let contact = Container::new(
        Text::new(model.contact)
            .size(typography::BODY_LG)
            .font(fonts::HEADING),
    )
    .width(Length::Fill)
    .align_x(Horizontal::Right);

    let toggle_button = button(icons::themed(icons::sized(
        model.glyph.icon(),
        sizing::ICON_MD,
    )))
    .on_press(Message::ToggleTheme)
    .padding(spacing::XS)
    .style(styles::button::ghost);

    let toggle = tooltip(
        toggle_button,
        Text::new(model.toggle_tooltip).size(typography::CAPTION),
        tooltip::Position::Left,
    );

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Center)
        .push(logo)
        .push(contact)
        .push(toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}
