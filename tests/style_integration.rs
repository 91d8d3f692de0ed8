// SPDX-License-Identifier: MPL-2.0
//! Integration tests to validate style and design token coherence.

#[cfg(test)]
mod tests {
    use datastore_home::ui::design_tokens::{palette, sizing, spacing};
    use datastore_home::ui::styles::{button, container};
    use datastore_home::ui::theming::{ColorScheme, ThemeMode};
    use iced::widget::button::Status;
    use iced::{Background, Theme};

    #[test]
    fn all_styles_are_callable_in_both_themes() {
        for theme in [Theme::Light, Theme::Dark] {
            for status in [Status::Active, Status::Hovered, Status::Pressed, Status::Disabled] {
                let _ = button::primary(&theme, status);
                let _ = button::secondary(&theme, status);
                let _ = button::ghost(&theme, status);
                let _ = button::menu_item(&theme, status);
            }
            let _ = container::page(&theme);
            let _ = container::bar(&theme);
            let _ = container::menu(&theme);
            let _ = container::muted(&theme);
        }
    }

    #[test]
    fn page_background_follows_theme_mode() {
        let light = container::page(&ThemeMode::Light.iced_theme());
        let dark = container::page(&ThemeMode::Dark.iced_theme());

        assert_eq!(
            light.background,
            Some(Background::Color(ColorScheme::light().surface_primary))
        );
        assert_eq!(
            dark.background,
            Some(Background::Color(ColorScheme::dark().surface_primary))
        );
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn primary_button_uses_brand_color() {
        let style = button::primary(&Theme::Light, Status::Active);
        assert_eq!(
            style.background,
            Some(Background::Color(palette::PRIMARY_500))
        );
    }

    #[test]
    fn layout_tokens_fit_the_minimum_window() {
        let min_width = datastore_home::app::config::MIN_WINDOW_WIDTH as f32;
        assert!(sizing::CTA_WIDTH + 2.0 * spacing::XL <= min_width);
        assert!(sizing::MENU_WIDTH < min_width);
    }
}
