// SPDX-License-Identifier: MPL-2.0
//! Welcome banner.

use crate::fonts;
use crate::i18n::{keys, MessageCatalog};
use crate::ui::design_tokens::{spacing, typography};
use iced::{
    alignment::Horizontal,
    widget::{Column, Text},
    Element,
};

#[derive(Debug, Clone, PartialEq)]
pub struct WelcomeModel {
    pub title: String,
    pub intro: String,
}

impl WelcomeModel {
    #[must_use]
    pub fn new(catalog: &MessageCatalog) -> Self {
        Self {
            title: catalog.tr(keys::WELCOME_TITLE),
            intro: catalog.tr(keys::WELCOME_INTRO),
        }
    }
}

pub fn view<'a, Message: 'a>(model: WelcomeModel) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(model.title)
                .size(typography::TITLE_LG)
                .font(fonts::HEADING)
                .center(),
        )
        .push(
            Text::new(model.intro)
                .size(typography::BODY_LG)
                .font(fonts::BODY)
                .center(),
        )
        .into()
}
