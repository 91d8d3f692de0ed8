// SPDX-License-Identifier: MPL-2.0
//! Footer with the language menu.
//!
//! The menu lists every registered locale by its native name. Picking one
//! navigates to that locale's home route and closes the menu.

use crate::i18n::{keys, Locale, MessageCatalog, LOCALES};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};

/// One entry of the language menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageEntry {
    pub locale: Locale,
    pub name: &'static str,
    pub current: bool,
}

/// Localized content of the footer.
#[derive(Debug, Clone, PartialEq)]
pub struct FooterModel {
    pub language_label: String,
    pub description: String,
    pub entries: Vec<LanguageEntry>,
}

impl FooterModel {
    #[must_use]
    pub fn new(catalog: &MessageCatalog) -> Self {
        let entries = LOCALES
            .into_iter()
            .map(|locale| LanguageEntry {
                locale,
                name: locale.native_name(),
                current: locale == catalog.locale(),
            })
            .collect();

        Self {
            language_label: catalog.tr(keys::LANGUAGE),
            description: catalog.tr(keys::DESCRIPTION),
            entries,
        }
    }
}

/// Messages emitted by the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ToggleMenu,
    SelectLocale(Locale),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(String),
}

/// Process a footer message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::SelectLocale(locale) => {
            *menu_open = false;
            Event::Navigate(locale.home_route())
        }
    }
}

/// Render the footer.
pub fn view<'a>(model: FooterModel, menu_open: bool) -> Element<'a, Message> {
    let language_button = button(
        Row::new()
            .spacing(spacing::XS)
            .align_y(Vertical::Center)
            .push(icons::themed(icons::sized(icons::globe(), sizing::ICON_SM)))
            .push(Text::new(model.language_label).size(typography::BODY)),
    )
    .on_press(Message::ToggleMenu)
    .padding([spacing::XXS, spacing::XS])
    .style(styles::button::ghost);

    let mut selector = Column::new().spacing(spacing::XXS).push(language_button);
    if menu_open {
        selector = selector.push(build_menu(model.entries));
    }

    let description = Container::new(Text::new(model.description).size(typography::CAPTION))
        .width(Length::Fill)
        .align_x(Horizontal::Right)
        .style(styles::container::muted);

    let row = Row::new()
        .spacing(spacing::MD)
        .padding([spacing::SM, spacing::LG])
        .align_y(Vertical::Bottom)
        .push(selector)
        .push(description);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}

fn build_menu<'a>(entries: Vec<LanguageEntry>) -> Element<'a, Message> {
    let items = entries.into_iter().fold(Column::new(), |column, entry| {
        let label = if entry.current {
            format!("{} ✓", entry.name)
        } else {
            entry.name.to_string()
        };

        column.push(
            button(Text::new(label).size(typography::BODY))
                .on_press(Message::SelectLocale(entry.locale))
                .width(Length::Fill)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::menu_item),
        )
    });

    Container::new(items)
        .width(Length::Fixed(sizing::MENU_WIDTH))
        .padding(spacing::XXS)
        .style(styles::container::menu)
        .into()
}
