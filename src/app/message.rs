// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and launch flags.

use crate::ui::shell;

/// Messages handled by [`App::update`](super::App).
#[derive(Debug, Clone)]
pub enum Message {
    /// Interaction inside the rendered page.
    Page(shell::Message),
    /// Outcome of registering one brand font face with the renderer.
    FontLoaded {
        variable: &'static str,
        result: Result<(), iced::font::Error>,
    },
}

/// Runtime flags passed in from the CLI launcher.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Explicit start route (e.g. `/de`), taken as is.
    pub route: Option<String>,
    /// Start language code; becomes the route `/<code>`.
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `DATASTORE_HOME_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
