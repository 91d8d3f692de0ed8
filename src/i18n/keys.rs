// SPDX-License-Identifier: MPL-2.0
//! Message ids looked up by the page sections.
//!
//! Sections refer to these constants rather than string literals so that
//! [`ALL`] stays the complete set checked against every catalog.

pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";

pub const CONTACT: &str = "contact";
pub const THEME_TOGGLE_TO_DARK: &str = "themeToggleToDark";
pub const THEME_TOGGLE_TO_LIGHT: &str = "themeToggleToLight";
pub const LOGO_ALT: &str = "logoAlt";

pub const WELCOME_TITLE: &str = "welcomeTitle";
pub const WELCOME_INTRO: &str = "welcomeIntro";

pub const MAIN_INSTANCE: &str = "mainInstance";
pub const WIKI: &str = "wiki";
pub const MASTERDATA_TOOLS: &str = "masterdataTools";

pub const OTHER_INSTANCES_TITLE: &str = "otherInstancesTitle";
pub const ANOTHER_INSTANCE: &str = "anotherInstance";

pub const LANGUAGE: &str = "language";

/// Every key referenced by the home page.
pub const ALL: &[&str] = &[
    TITLE,
    DESCRIPTION,
    CONTACT,
    THEME_TOGGLE_TO_DARK,
    THEME_TOGGLE_TO_LIGHT,
    LOGO_ALT,
    WELCOME_TITLE,
    WELCOME_INTRO,
    MAIN_INSTANCE,
    WIKI,
    MASTERDATA_TOOLS,
    OTHER_INSTANCES_TITLE,
    ANOTHER_INSTANCE,
    LANGUAGE,
];
