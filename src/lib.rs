// SPDX-License-Identifier: MPL-2.0
//! `datastore_home` is the BAM Data Store project homepage as a native
//! desktop application built with the Iced GUI framework.
//!
//! Pages are addressed by route paths such as `/en` or `/de`. The first path
//! segment selects the locale; unsupported locales get a fallback page.
//! Strings come from embedded Fluent catalogs, and a light/dark theme can be
//! toggled for the session.

#![doc(html_root_url = "https://docs.rs/datastore_home/0.1.0")]

pub mod app;
pub mod error;
pub mod fonts;
pub mod i18n;
pub mod icon;
pub mod links;
pub mod ui;
