// SPDX-License-Identifier: MPL-2.0
//! Registry of the locales the site is published in.

use std::fmt;
use unic_langid::LanguageIdentifier;

/// A supported display language.
///
/// The set is closed: adding a language means adding a variant here, a
/// catalog under `assets/i18n/`, and an entry in [`LOCALES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    De,
}

/// Every registered locale, in the order shown in the language menu.
pub const LOCALES: [Locale; 2] = [Locale::En, Locale::De];

/// Locale used when nothing else selects one.
pub const DEFAULT_LOCALE: Locale = Locale::En;

impl Locale {
    /// Route token for this locale (`/en`, `/de`).
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::De => "de",
        }
    }

    /// Name of the language written in the language itself.
    #[must_use]
    pub fn native_name(self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::De => "Deutsch",
        }
    }

    /// Language identifier handed to Fluent for plural and number rules.
    #[must_use]
    pub fn langid(self) -> LanguageIdentifier {
        // Codes are plain ISO 639-1 subtags; the fallback is never taken.
        self.code().parse().unwrap_or_default()
    }

    /// Route path of the landing page in this locale.
    #[must_use]
    pub fn home_route(self) -> String {
        format!("/{}", self.code())
    }

    /// Looks a locale up by its exact route token.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        LOCALES.into_iter().find(|locale| locale.code() == code)
    }
}

impl Default for Locale {
    fn default() -> Self {
        DEFAULT_LOCALE
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn langid_matches_code() {
        for locale in LOCALES {
            assert_eq!(locale.langid().to_string(), locale.code());
        }
    }

    #[test]
    fn default_locale_is_registered() {
        assert!(LOCALES.contains(&DEFAULT_LOCALE));
        assert_eq!(Locale::default(), Locale::En);
    }

    #[test]
    fn codes_are_unique() {
        for (i, a) in LOCALES.iter().enumerate() {
            for b in &LOCALES[i + 1..] {
                assert_ne!(a.code(), b.code());
            }
        }
    }

    #[test]
    fn from_code_round_trips_every_locale() {
        for locale in LOCALES {
            assert_eq!(Locale::from_code(locale.code()), Some(locale));
        }
    }

    #[test]
    fn home_route_prefixes_code() {
        assert_eq!(Locale::De.home_route(), "/de");
        assert_eq!(Locale::En.to_string(), "en");
    }
}
