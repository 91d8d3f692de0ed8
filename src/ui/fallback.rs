// SPDX-License-Identifier: MPL-2.0
//! Page shown when the route names a language the site is not published in.
//!
//! The text is deliberately not taken from a catalog: there is no resolved
//! locale to pick one from, so it is always English.

use crate::fonts;
use crate::i18n::DEFAULT_LOCALE;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Text},
    Element, Length,
};

pub const HEADING: &str = "Language not supported";
pub const BODY: &str =
    "The selected language is not supported. Please go back and choose a valid language.";

/// Static content of the fallback page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackView {
    pub heading: &'static str,
    pub body: &'static str,
    pub back_label: String,
    /// Route of the default locale's home page.
    pub back_route: String,
}

impl Default for FallbackView {
    fn default() -> Self {
        Self {
            heading: HEADING,
            body: BODY,
            back_label: format!("Go to the {} page", DEFAULT_LOCALE.native_name()),
            back_route: DEFAULT_LOCALE.home_route(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    BackToDefault,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Navigate(String),
}

#[must_use]
pub fn update(message: &Message, fallback: &FallbackView) -> Event {
    match message {
        Message::BackToDefault => Event::Navigate(fallback.back_route.clone()),
    }
}

pub fn view<'a>(fallback: FallbackView) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .padding(spacing::XL)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .push(
            Text::new(fallback.heading)
                .size(typography::TITLE_LG)
                .font(fonts::HEADING),
        )
        .push(Text::new(fallback.body).size(typography::BODY_LG))
        .push(
            button(Text::new(fallback.back_label).size(typography::BODY))
                .on_press(Message::BackToDefault)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::primary),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .style(styles::container::page)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_points_back_to_default_locale() {
        let fallback = FallbackView::default();
        assert_eq!(fallback.back_route, "/en");
        assert_eq!(fallback.back_label, "Go to the English page");
        assert_eq!(fallback.back_route, DEFAULT_LOCALE.home_route());
        assert!(fallback.back_label.contains(DEFAULT_LOCALE.native_name()));
        assert_eq!(
            update(&Message::BackToDefault, &fallback),
            Event::Navigate("/en".to_string())
        );
    }

    #[test]
    fn fallback_view_renders() {
        let _element = view(FallbackView::default());
    }
}
