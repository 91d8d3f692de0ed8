// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! This module follows the Elm-style "state down, messages up" pattern: each
//! section builds a model from the active catalog, renders it, and reports
//! user intent upwards as an `Event`.
//!
//! # Page Sections
//!
//! - [`header`] - Logo, contact label and theme toggle
//! - [`main_content`] - Welcome banner and call-to-action buttons
//! - [`footer`] - Language menu and site description
//! - [`fallback`] - Page for unsupported languages
//! - [`shell`] - Composes the sections for a resolved locale
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark theme mode and its session state
//! - [`icons`] - Embedded SVG icons

pub mod design_tokens;
pub mod fallback;
pub mod footer;
pub mod header;
pub mod icons;
pub mod main_content;
pub mod shell;
pub mod styles;
pub mod theming;
