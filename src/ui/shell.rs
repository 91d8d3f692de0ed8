// SPDX-License-Identifier: MPL-2.0
//! Presentation shell: turns a resolved locale and the theme into a page.
//!
//! Composition and rendering are split. [`compose`] builds a [`Page`] holding
//! every localized string the page shows; [`view`] turns it into widgets.
//! The branch on the locale happens once, in [`compose`].

use crate::i18n::{keys, CatalogStore, Locale, MessageCatalog, ResolvedLocale};
use crate::ui::fallback::{self, FallbackView};
use crate::ui::footer::{self, FooterModel};
use crate::ui::header::{self, HeaderModel};
use crate::ui::main_content::{self, MainModel};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::{
    widget::{Column, Container},
    Element, Length,
};

/// Window title of the fallback page.
pub const FALLBACK_TITLE: &str = "BAM Data Store";

/// Input of the shell for one render.
#[derive(Debug, Clone, Copy)]
pub enum PageContext<'a> {
    Localized {
        locale: Locale,
        catalog: &'a MessageCatalog,
    },
    Unsupported,
}

impl<'a> PageContext<'a> {
    #[must_use]
    pub fn new(resolved: ResolvedLocale, catalogs: &'a CatalogStore) -> Self {
        match resolved {
            ResolvedLocale::Supported(locale) => PageContext::Localized {
                locale,
                catalog: catalogs.catalog(locale),
            },
            ResolvedLocale::Unsupported => PageContext::Unsupported,
        }
    }
}

/// Sections of a page, in render order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Main,
    Footer,
    Fallback,
}

const HOME_SECTIONS: &[Section] = &[Section::Header, Section::Main, Section::Footer];
const FALLBACK_SECTIONS: &[Section] = &[Section::Fallback];

/// Localized home page.
#[derive(Debug, Clone, PartialEq)]
pub struct HomePage {
    pub locale: Locale,
    pub title: String,
    pub header: HeaderModel,
    pub main: MainModel,
    pub footer: FooterModel,
}

/// A fully composed page.
#[derive(Debug, Clone, PartialEq)]
pub enum Page {
    Fallback(FallbackView),
    Home(Box<HomePage>),
}

impl Page {
    #[must_use]
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Page::Fallback(_) => FALLBACK_SECTIONS,
            Page::Home(_) => HOME_SECTIONS,
        }
    }

    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Page::Fallback(_) => FALLBACK_TITLE.to_string(),
            Page::Home(home) => home.title.clone(),
        }
    }

    #[must_use]
    pub fn locale(&self) -> Option<Locale> {
        match self {
            Page::Fallback(_) => None,
            Page::Home(home) => Some(home.locale),
        }
    }
}

/// Builds the page for a context and theme. Pure.
#[must_use]
pub fn compose(ctx: &PageContext<'_>, theme: ThemeMode) -> Page {
    match *ctx {
        PageContext::Unsupported => Page::Fallback(FallbackView::default()),
        PageContext::Localized { locale, catalog } => Page::Home(Box::new(HomePage {
            locale,
            title: catalog.tr(keys::TITLE),
            header: HeaderModel::new(catalog, theme),
            main: MainModel::new(catalog),
            footer: FooterModel::new(catalog),
        })),
    }
}

/// Messages emitted by the page sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    Header(header::Message),
    Main(main_content::Message),
    Footer(footer::Message),
    Fallback(fallback::Message),
}

/// Contextual data needed to render a page.
pub struct ViewContext {
    pub page: Page,
    pub footer_menu_open: bool,
}

/// Render a composed page.
pub fn view<'a>(ctx: ViewContext) -> Element<'a, Message> {
    let content: Element<'a, Message> = match ctx.page {
        Page::Fallback(fallback_view) => fallback::view(fallback_view).map(Message::Fallback),
        Page::Home(home) => {
            let HomePage {
                header,
                main,
                footer,
                ..
            } = *home;

            Column::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(header::view(header).map(Message::Header))
                .push(main_content::view(main).map(Message::Main))
                .push(footer::view(footer, ctx.footer_menu_open).map(Message::Footer))
                .into()
        }
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page)
        .into()
}
