// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the landing page.
//!
//! This module provides localization using the Fluent localization system.
//!
//! # Features
//!
//! - Fixed registry of supported locales ([`locale`])
//! - Route segment resolution with an explicit "unsupported" outcome ([`resolver`])
//! - Embedded `.ftl` catalogs loaded once at startup ([`catalog`])
//! - A single list of message ids used by the page ([`keys`])

pub mod catalog;
pub mod keys;
pub mod locale;
pub mod resolver;

pub use catalog::{CatalogStore, MessageCatalog};
pub use locale::{Locale, DEFAULT_LOCALE, LOCALES};
pub use resolver::{resolve, resolve_path, ResolvedLocale};

/// Registered locale matching the operating system language, if any.
///
/// Only the primary language subtag is compared, so `de-AT` and `de_DE`
/// both select [`Locale::De`].
#[must_use]
pub fn system_locale() -> Option<Locale> {
    sys_locale::get_locale().and_then(|tag| locale_from_tag(&tag))
}

/// Registered locale for a BCP-47 style tag (`de-DE`, `en_US`, `de`).
#[must_use]
pub fn locale_from_tag(tag: &str) -> Option<Locale> {
    let language = tag.split(|c: char| c == '-' || c == '_').next()?;
    Locale::from_code(&language.to_ascii_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locale_from_tag_uses_language_subtag() {
        assert_eq!(locale_from_tag("de-DE"), Some(Locale::De));
        assert_eq!(locale_from_tag("de_AT"), Some(Locale::De));
        assert_eq!(locale_from_tag("EN-us"), Some(Locale::En));
        assert_eq!(locale_from_tag("en"), Some(Locale::En));
    }

    #[test]
    fn locale_from_tag_rejects_unregistered_languages() {
        assert_eq!(locale_from_tag("fr-FR"), None);
        assert_eq!(locale_from_tag(""), None);
    }

    #[test]
    fn system_locale_is_registered_when_present() {
        // Depends on the host; only the invariant can be checked.
        if let Some(locale) = system_locale() {
            assert!(LOCALES.contains(&locale));
        }
    }
}
