// SPDX-License-Identifier: MPL-2.0
//! Fluent message catalogs, one per registered locale.
//!
//! Catalogs are embedded at compile time from `assets/i18n/<code>.ftl` and
//! parsed once at startup. A registered locale without a usable catalog is
//! a packaging defect, so [`CatalogStore::load_all`] fails instead of
//! degrading.

use super::locale::{Locale, LOCALES};
use crate::error::{Error, Result};
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use std::fmt;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Asset;

/// Prefix of the placeholder rendered for a key absent from a catalog.
pub const MISSING_PREFIX: &str = "MISSING: ";

/// Translations for a single locale.
pub struct MessageCatalog {
    locale: Locale,
    bundle: FluentBundle<FluentResource>,
}

impl fmt::Debug for MessageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MessageCatalog")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}

impl MessageCatalog {
    /// Loads the embedded catalog of `locale`.
    pub fn load(locale: Locale) -> Result<Self> {
        let filename = format!("{}.ftl", locale.code());
        let content = Asset::get(&filename).ok_or_else(|| {
            Error::catalog(locale.code(), format!("{filename} is not embedded"))
        })?;
        let source = std::str::from_utf8(content.data.as_ref())
            .map_err(|err| Error::catalog(locale.code(), err.to_string()))?;
        Self::from_source(locale, source.to_string())
    }

    /// Parses a catalog from Fluent source text.
    pub fn from_source(locale: Locale, source: String) -> Result<Self> {
        let resource = FluentResource::try_new(source).map_err(|(_, errors)| {
            Error::catalog(locale.code(), format!("parse errors: {errors:?}"))
        })?;

        let mut bundle = FluentBundle::new(vec![locale.langid()]);
        bundle.set_use_isolating(false);
        bundle
            .add_resource(resource)
            .map_err(|errors| Error::catalog(locale.code(), format!("{errors:?}")))?;

        Ok(Self { locale, bundle })
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    #[must_use]
    pub fn has_message(&self, key: &str) -> bool {
        self.bundle
            .get_message(key)
            .is_some_and(|message| message.value().is_some())
    }

    /// Keys from `keys` that this catalog cannot translate.
    #[must_use]
    pub fn missing_keys<'k>(&self, keys: &[&'k str]) -> Vec<&'k str> {
        keys.iter()
            .copied()
            .filter(|key| !self.has_message(key))
            .collect()
    }

    /// Translates `key`.
    ///
    /// An absent key renders as `MISSING: <key>` so the page stays usable and
    /// the gap is visible; it never falls back to another locale. Pages are
    /// recomposed on every frame, so this only logs at debug level; missing
    /// keys are reported once by [`CatalogStore::load_all`].
    #[must_use]
    pub fn tr(&self, key: &str) -> String {
        if let Some(pattern) = self.bundle.get_message(key).and_then(|m| m.value()) {
            let mut errors = vec![];
            let value = self.bundle.format_pattern(pattern, None, &mut errors);
            if errors.is_empty() {
                return value.into_owned();
            }
            tracing::debug!(locale = %self.locale, key, ?errors, "Fluent formatting errors");
        } else {
            tracing::debug!(locale = %self.locale, key, "missing translation");
        }
        format!("{MISSING_PREFIX}{key}")
    }
}

/// Every registered locale's catalog, loaded up front.
#[derive(Debug)]
pub struct CatalogStore {
    catalogs: HashMap<Locale, MessageCatalog>,
}

impl CatalogStore {
    /// Loads the catalog of every registered locale.
    ///
    /// Keys from `required` missing in a catalog are logged; the catalogs are
    /// still returned so the page renders with placeholders.
    pub fn load_all(required: &[&str]) -> Result<Self> {
        let mut catalogs = HashMap::with_capacity(LOCALES.len());
        for locale in LOCALES {
            let catalog = MessageCatalog::load(locale)?;
            let missing = catalog.missing_keys(required);
            if !missing.is_empty() {
                tracing::warn!(%locale, ?missing, "catalog is incomplete");
            }
            catalogs.insert(locale, catalog);
        }
        tracing::debug!(count = catalogs.len(), "message catalogs loaded");
        Ok(Self { catalogs })
    }

    /// Catalog of a registered locale.
    #[must_use]
    pub fn catalog(&self, locale: Locale) -> &MessageCatalog {
        // load_all inserts every variant of LOCALES, and Locale is closed.
        &self.catalogs[&locale]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::keys;

    #[test]
    fn every_registered_locale_has_an_embedded_catalog() {
        for locale in LOCALES {
            let catalog = MessageCatalog::load(locale).expect("catalog should load");
            assert_eq!(catalog.locale(), locale);
        }
    }

    #[test]
    fn catalogs_contain_every_referenced_key() {
        for locale in LOCALES {
            let catalog = MessageCatalog::load(locale).expect("catalog should load");
            let missing = catalog.missing_keys(keys::ALL);
            assert!(missing.is_empty(), "{locale} is missing {missing:?}");
        }
    }

    #[test]
    fn missing_key_renders_visible_placeholder() {
        let catalog = MessageCatalog::load(Locale::En).expect("catalog should load");
        assert_eq!(catalog.tr("doesNotExist"), "MISSING: doesNotExist");
    }

    #[test]
    fn no_cross_locale_fallback() {
        let catalog =
            MessageCatalog::from_source(Locale::De, "wiki = Dokumentation\n".to_string())
                .expect("source should parse");
        assert_eq!(catalog.tr(keys::WIKI), "Dokumentation");
        assert_eq!(catalog.tr(keys::MAIN_INSTANCE), "MISSING: mainInstance");
        assert_eq!(catalog.missing_keys(&[keys::WIKI, keys::CONTACT]), vec![keys::CONTACT]);
    }

    #[test]
    fn invalid_source_is_a_catalog_error() {
        let result = MessageCatalog::from_source(Locale::En, "= no id\n".to_string());
        match result {
            Err(Error::Catalog { locale, .. }) => assert_eq!(locale, "en"),
            other => panic!("expected catalog error, got {other:?}"),
        }
    }

    #[test]
    fn store_serves_each_locale() {
        let store = CatalogStore::load_all(keys::ALL).expect("store should load");
        assert_eq!(store.catalog(Locale::En).tr(keys::WIKI), "Documentation");
        assert_eq!(store.catalog(Locale::De).tr(keys::WIKI), "Dokumentation");
    }
}
