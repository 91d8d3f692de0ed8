// SPDX-License-Identifier: MPL-2.0
//! Maps the locale segment of a route onto the registry.
//!
//! Segments are routing tokens, not free text: matching is exact and
//! case-sensitive, and no whitespace is trimmed. Anything that is not a
//! registered code, including the empty string, resolves to
//! [`ResolvedLocale::Unsupported`].

use super::locale::Locale;

/// Outcome of resolving a requested locale segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedLocale {
    Supported(Locale),
    Unsupported,
}

impl ResolvedLocale {
    #[must_use]
    pub fn locale(self) -> Option<Locale> {
        match self {
            ResolvedLocale::Supported(locale) => Some(locale),
            ResolvedLocale::Unsupported => None,
        }
    }

    #[must_use]
    pub fn is_supported(self) -> bool {
        matches!(self, ResolvedLocale::Supported(_))
    }
}

/// Resolves a raw route segment. Total over all inputs.
#[must_use]
pub fn resolve(segment: &str) -> ResolvedLocale {
    match Locale::from_code(segment) {
        Some(locale) => ResolvedLocale::Supported(locale),
        None => ResolvedLocale::Unsupported,
    }
}

/// Returns the first path segment of a route, without query or fragment.
///
/// `"/de/about?x=1"` yields `"de"`; `"/"` and `""` yield `""`.
#[must_use]
pub fn locale_segment(path: &str) -> &str {
    let path = path.split(|c: char| c == '?' || c == '#').next().unwrap_or_default();
    let path = path.strip_prefix('/').unwrap_or(path);
    path.split('/').next().unwrap_or_default()
}

/// Resolves the locale segment of a full route path.
#[must_use]
pub fn resolve_path(path: &str) -> ResolvedLocale {
    resolve(locale_segment(path))
}
