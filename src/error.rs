// SPDX-License-Identifier: MPL-2.0
//! Error types shared across the crate.
//!
//! Only configuration and asset problems are errors. An unsupported locale
//! in a route is an expected outcome and is modelled by
//! [`ResolvedLocale::Unsupported`](crate::i18n::ResolvedLocale) instead.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),

    /// A registered locale has no usable catalog. Fatal at startup.
    #[error("Catalog Error ({locale}): {reason}")]
    Catalog { locale: String, reason: String },

    #[error("Font Error: {0}")]
    Font(String),
}

impl Error {
    pub(crate) fn catalog(locale: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::Catalog {
            locale: locale.into(),
            reason: reason.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
