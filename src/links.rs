// SPDX-License-Identifier: MPL-2.0
//! Link targets rendered on the landing page.
//!
//! External targets open in the system browser. Internal targets are route
//! paths handled by the application itself.

/// Main instance of the Data Store.
pub const MAIN_INSTANCE_URL: &str = "https://main.datastore.bam.de/";

/// Documentation wiki.
pub const WIKI_URL: &str = "https://datastore.bam.de/en/home";

/// Route of the masterdata tools page.
pub const MASTERDATA_TOOLS_ROUTE: &str = "/en";

/// Where activating a link leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Link {
    /// Opened with the platform's URL handler.
    External(&'static str),
    /// Navigates the application to another route.
    Internal(String),
}

impl Link {
    #[must_use]
    pub fn internal(route: impl Into<String>) -> Self {
        Link::Internal(route.into())
    }
}

/// Opens an external URL in the system browser.
///
/// Failures are logged; the page keeps working without the link.
pub fn open_external(url: &str) {
    #[cfg(any(target_os = "macos", target_os = "linux", target_os = "windows"))]
    {
        match open::that_detached(url) {
            Ok(()) => tracing::info!(url, "opened external link"),
            Err(err) => tracing::error!(url, %err, "failed to open external link"),
        }
    }

    #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
    {
        tracing::warn!(url, "URL opening not supported on this platform");
    }
}
