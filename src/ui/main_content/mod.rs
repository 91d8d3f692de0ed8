// SPDX-License-Identifier: MPL-2.0
//! Main area of the landing page: welcome banner, call-to-action buttons and
//! the "other instances" row.

pub mod main_buttons;
pub mod other_instances;
pub mod welcome;

use crate::fonts;
use crate::i18n::MessageCatalog;
use crate::links::Link;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Text},
    Element, Length,
};
use other_instances::OtherInstancesModel;
use welcome::WelcomeModel;

/// A labelled button; `link` is `None` for slots without a target.
#[derive(Debug, Clone, PartialEq)]
pub struct CallToAction {
    pub label: String,
    pub link: Option<Link>,
}

/// Localized content of the main area.
#[derive(Debug, Clone, PartialEq)]
pub struct MainModel {
    pub welcome: WelcomeModel,
    pub buttons: Vec<CallToAction>,
    pub other_instances: OtherInstancesModel,
}

impl MainModel {
    #[must_use]
    pub fn new(catalog: &MessageCatalog) -> Self {
        Self {
            welcome: WelcomeModel::new(catalog),
            buttons: main_buttons::build(catalog),
            other_instances: OtherInstancesModel::new(catalog),
        }
    }
}

/// Messages emitted by the main area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Activate(Link),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    OpenExternal(&'static str),
    Navigate(String),
}

#[must_use]
pub fn update(message: Message) -> Event {
    match message {
        Message::Activate(Link::External(url)) => Event::OpenExternal(url),
        Message::Activate(Link::Internal(route)) => Event::Navigate(route),
    }
}

/// Render the main area.
pub fn view<'a>(model: MainModel) -> Element<'a, Message> {
    let buttons = model
        .buttons
        .into_iter()
        .fold(Column::new().spacing(spacing::SM), |column, cta| {
            column.push(cta_button(cta, styles::button::primary))
        })
        .align_x(Horizontal::Center);

    let others = model
        .other_instances
        .entries
        .into_iter()
        .fold(Row::new().spacing(spacing::MD), |row, cta| {
            row.push(cta_button(cta, styles::button::secondary))
        });

    let others_section = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(model.other_instances.title)
                .size(typography::TITLE_MD)
                .font(fonts::HEADING),
        )
        .push(others);

    let content = Column::new()
        .spacing(spacing::XXL)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .align_x(Horizontal::Center)
        .push(welcome::view(model.welcome))
        .push(buttons)
        .push(others_section);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .into()
}

fn cta_button<'a>(
    cta: CallToAction,
    style: fn(&iced::Theme, button::Status) -> button::Style,
) -> Element<'a, Message> {
    let label = Text::new(cta.label)
        .size(typography::BODY_LG)
        .font(fonts::BODY)
        .center();

    let mut cta_button = button(label)
        .width(Length::Fixed(sizing::CTA_WIDTH))
        .height(Length::Fixed(sizing::CTA_HEIGHT))
        .padding([spacing::XS, spacing::MD])
        .style(style);

    if let Some(link) = cta.link {
        cta_button = cta_button.on_press(Message::Activate(link));
    }

    cta_button.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{keys, Locale};
    use crate::links;
    use pretty_assertions::assert_eq;

    fn model(locale: Locale) -> MainModel {
        let catalog = MessageCatalog::load(locale).expect("catalog should load");
        MainModel::new(&catalog)
    }

    #[test]
    fn primary_buttons_keep_their_order_and_targets() {
        let main = model(Locale::En);
        let labels: Vec<&str> = main.buttons.iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Main instance of the Data Store", "Documentation", "Masterdata Tools"]
        );
        assert_eq!(
            main.buttons[0].link,
            Some(Link::External(links::MAIN_INSTANCE_URL))
        );
        assert_eq!(main.buttons[1].link, Some(Link::External(links::WIKI_URL)));
        assert_eq!(main.buttons[2].link, Some(Link::internal("/en")));
    }

    #[test]
    fn other_instances_have_no_target() {
        let main = model(Locale::De);
        assert_eq!(main.other_instances.entries.len(), other_instances::SLOTS);
        assert!(main.other_instances.entries.iter().all(|e| e.link.is_none()));
    }

    #[test]
    fn welcome_is_localized() {
        let de = model(Locale::De);
        let en = model(Locale::En);
        assert_ne!(de.welcome.title, en.welcome.title);
        assert!(!de.welcome.title.starts_with(crate::i18n::catalog::MISSING_PREFIX));
        let catalog = MessageCatalog::load(Locale::De).expect("catalog should load");
        assert_eq!(de.welcome.intro, catalog.tr(keys::WELCOME_INTRO));
    }

    #[test]
    fn activating_links_emits_matching_events() {
        assert_eq!(
            update(Message::Activate(Link::External(links::WIKI_URL))),
            Event::OpenExternal(links::WIKI_URL)
        );
        assert_eq!(
            update(Message::Activate(Link::internal("/de"))),
            Event::Navigate("/de".to_string())
        );
    }

    #[test]
    fn main_view_renders() {
        let _element = view(model(Locale::En));
    }
}
