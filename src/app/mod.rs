// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the landing page.
//!
//! The `App` owns the loaded catalogs, the current route and the theme
//! state. Every render resolves the route, composes a fresh page and hands
//! it to the shell, so no locale-dependent value outlives a frame. Section
//! events come back through [`Message::Page`] and are turned into side
//! effects here: theme toggles, navigation and opening external links.

pub mod config;
mod message;
pub mod paths;
pub mod route;

pub use message::{Flags, Message};

use crate::fonts;
use crate::i18n::{self, resolve_path, CatalogStore, ResolvedLocale};
use crate::links;
use crate::ui::fallback::{self, FallbackView};
use crate::ui::footer;
use crate::ui::header;
use crate::ui::main_content;
use crate::ui::shell::{self, Page, PageContext, ViewContext};
use crate::ui::theming::ThemeState;
use config::{Config, WindowConfig};
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    catalogs: CatalogStore,
    /// Current route path, e.g. `/de`.
    route: String,
    theme: ThemeState,
    /// Whether the footer language menu is open.
    footer_menu_open: bool,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("route", &self.route)
            .field("theme", &self.theme.mode())
            .field("footer_menu_open", &self.footer_menu_open)
            .finish()
    }
}

/// Builds the window settings from the `[window]` section.
pub fn window_settings(window: &WindowConfig) -> window::Settings {
    let (width, height) = window.clamped_size();

    window::Settings {
        size: iced::Size::new(width as f32, height as f32),
        min_size: Some(iced::Size::new(
            config::MIN_WINDOW_WIDTH as f32,
            config::MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
///
/// `catalogs` must already be loaded; a missing catalog never gets this far.
pub fn run(flags: Flags, catalogs: CatalogStore) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_override(flags.config_dir.clone());
    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!(%warning, "settings could not be read, using defaults");
    }
    let window = window_settings(&config.window);

    // iced 0.14 requires an `Fn` boot closure; the state is consumed once.
    let boot_state = RefCell::new(Some((flags, catalogs, config)));
    let boot = move || {
        let (flags, catalogs, config) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(&flags, catalogs, &config)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .run()
}

impl App {
    /// Sets up the start route and queues the brand font loads.
    fn new(flags: &Flags, catalogs: CatalogStore, config: &Config) -> (Self, Task<Message>) {
        let route = route::initial_route(flags, config, i18n::system_locale());
        tracing::info!(%route, "starting");

        let app = App {
            catalogs,
            route,
            theme: ThemeState::new(),
            footer_menu_open: false,
        };

        (app, load_fonts(config))
    }

    /// Composes the page for the current route and theme.
    fn page(&self) -> Page {
        let ctx = PageContext::new(resolve_path(&self.route), &self.catalogs);
        shell::compose(&ctx, self.theme.mode())
    }

    fn title(&self) -> String {
        self.page().title()
    }

    fn theme(&self) -> Theme {
        self.theme.mode().iced_theme()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Page(page_message) => self.handle_page_message(page_message),
            Message::FontLoaded { variable, result } => match result {
                Ok(()) => tracing::debug!(variable, "font loaded"),
                Err(err) => tracing::warn!(variable, ?err, "font rejected by renderer"),
            },
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        shell::view(ViewContext {
            page: self.page(),
            footer_menu_open: self.footer_menu_open,
        })
        .map(Message::Page)
    }

    fn handle_page_message(&mut self, message: shell::Message) {
        match message {
            shell::Message::Header(header_message) => match header::update(&header_message) {
                header::Event::ToggleTheme => {
                    let mode = self.theme.toggle();
                    tracing::debug!(?mode, "theme toggled");
                }
            },
            shell::Message::Main(main_message) => match main_content::update(main_message) {
                main_content::Event::OpenExternal(url) => links::open_external(url),
                main_content::Event::Navigate(route) => self.navigate(route),
            },
            shell::Message::Footer(footer_message) => {
                match footer::update(footer_message, &mut self.footer_menu_open) {
                    footer::Event::None => {}
                    footer::Event::Navigate(route) => self.navigate(route),
                }
            }
            shell::Message::Fallback(fallback_message) => {
                let fallback::Event::Navigate(route) =
                    fallback::update(&fallback_message, &FallbackView::default());
                self.navigate(route);
            }
        }
    }

    fn navigate(&mut self, route: String) {
        self.footer_menu_open = false;
        match resolve_path(&route) {
            ResolvedLocale::Supported(locale) => tracing::info!(%route, %locale, "navigated"),
            ResolvedLocale::Unsupported => {
                tracing::warn!(%route, "route names no supported locale");
            }
        }
        self.route = route;
    }

    #[cfg(test)]
    fn theme_mode(&self) -> crate::ui::theming::ThemeMode {
        self.theme.mode()
    }
}

/// One font task per brand face found in `[fonts] directory`.
fn load_fonts(config: &Config) -> Task<Message> {
    let Some(dir) = config.fonts.directory.as_deref() else {
        return Task::none();
    };

    Task::batch(fonts::read_faces(dir).into_iter().map(|loaded| {
        let variable = loaded.face.variable;
        iced::font::load(loaded.bytes)
            .map(move |result| Message::FontLoaded { variable, result })
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{keys, Locale};
    use crate::links::Link;
    use crate::ui::shell::FALLBACK_TITLE;
    use crate::ui::theming::ThemeMode;

    fn app_at(route: &str) -> App {
        let catalogs = CatalogStore::load_all(keys::ALL).expect("catalogs should load");
        let flags = Flags {
            route: Some(route.to_string()),
            ..Flags::default()
        };
        App::new(&flags, catalogs, &Config::default()).0
    }

    fn send(app: &mut App, message: shell::Message) {
        let _ = app.update(Message::Page(message));
    }

    #[test]
    fn starts_on_requested_route_in_light_mode() {
        let app = app_at("/de");
        assert_eq!(app.route, "/de");
        assert_eq!(app.theme_mode(), ThemeMode::Light);
        assert_eq!(app.page().locale(), Some(Locale::De));
    }

    #[test]
    fn title_follows_route() {
        let app = app_at("/en");
        let catalog = app.catalogs.catalog(Locale::En);
        assert_eq!(app.title(), catalog.tr(keys::TITLE));
        assert_eq!(app_at("/fr").title(), FALLBACK_TITLE);
    }

    #[test]
    fn header_toggle_flips_theme() {
        let mut app = app_at("/en");
        send(&mut app, shell::Message::Header(header::Message::ToggleTheme));
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
        assert!(matches!(app.theme(), Theme::Dark));
        send(&mut app, shell::Message::Header(header::Message::ToggleTheme));
        assert_eq!(app.theme_mode(), ThemeMode::Light);
    }

    #[test]
    fn choosing_a_language_navigates_and_closes_menu() {
        let mut app = app_at("/en");
        send(&mut app, shell::Message::Footer(footer::Message::ToggleMenu));
        assert!(app.footer_menu_open);

        send(
            &mut app,
            shell::Message::Footer(footer::Message::SelectLocale(Locale::De)),
        );
        assert_eq!(app.route, "/de");
        assert!(!app.footer_menu_open);
    }

    #[test]
    fn fallback_navigation_closes_an_open_menu() {
        let mut app = app_at("/en");
        send(&mut app, shell::Message::Footer(footer::Message::ToggleMenu));
        assert!(app.footer_menu_open);

        send(
            &mut app,
            shell::Message::Main(main_content::Message::Activate(Link::internal("/fr"))),
        );
        assert_eq!(app.route, "/fr");
        assert!(!app.footer_menu_open);
    }

    #[test]
    fn internal_link_navigates() {
        let mut app = app_at("/de");
        send(
            &mut app,
            shell::Message::Main(main_content::Message::Activate(Link::internal("/en"))),
        );
        assert_eq!(app.route, "/en");
    }

    #[test]
    fn fallback_back_button_returns_to_default_locale() {
        let mut app = app_at("/fr");
        assert!(matches!(app.page(), Page::Fallback(_)));

        send(
            &mut app,
            shell::Message::Fallback(fallback::Message::BackToDefault),
        );
        assert_eq!(app.route, "/en");
        assert_eq!(app.page().locale(), Some(Locale::En));
    }

    #[test]
    fn theme_survives_navigation() {
        let mut app = app_at("/en");
        send(&mut app, shell::Message::Header(header::Message::ToggleTheme));
        send(
            &mut app,
            shell::Message::Footer(footer::Message::SelectLocale(Locale::De)),
        );
        assert_eq!(app.theme_mode(), ThemeMode::Dark);
    }

    #[test]
    fn window_settings_respect_minimum() {
        let settings = window_settings(&WindowConfig {
            width: 10,
            height: 10,
        });
        assert_eq!(
            settings.size,
            iced::Size::new(
                config::MIN_WINDOW_WIDTH as f32,
                config::MIN_WINDOW_HEIGHT as f32
            )
        );
    }

    #[test]
    fn fonts_are_skipped_without_directory() {
        let _task = load_fonts(&Config::default());
    }
}
