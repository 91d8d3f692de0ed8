// SPDX-License-Identifier: MPL-2.0
//! Start route selection.
//!
//! Explicit CLI input is taken verbatim so an unsupported language still
//! reaches the fallback page. Preferences from the config file and the OS
//! only count when they name a registered locale.

use super::config::Config;
use super::Flags;
use crate::i18n::{self, Locale, DEFAULT_LOCALE};

/// Picks the route the window opens on.
///
/// Order: `--route`, `--lang`, `[general] language`, the OS locale, then the
/// default locale's home route.
#[must_use]
pub fn initial_route(flags: &Flags, config: &Config, system: Option<Locale>) -> String {
    if let Some(route) = &flags.route {
        return route.clone();
    }

    if let Some(lang) = &flags.lang {
        return format!("/{lang}");
    }

    if let Some(tag) = &config.general.language {
        match i18n::locale_from_tag(tag) {
            Some(locale) => return locale.home_route(),
            None => tracing::warn!(language = %tag, "configured language is not registered"),
        }
    }

    system.unwrap_or(DEFAULT_LOCALE).home_route()
}
