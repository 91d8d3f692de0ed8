// SPDX-License-Identifier: MPL-2.0
//! Default values for configuration settings.
//!
//! # Categories
//!
//! - **Window**: initial and minimum window size

// ==========================================================================
// Window Defaults
// ==========================================================================

/// Default window width in logical pixels.
pub const DEFAULT_WINDOW_WIDTH: u32 = 1024;

/// Default window height in logical pixels.
pub const DEFAULT_WINDOW_HEIGHT: u32 = 720;

/// Smallest window width the page layout supports.
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Smallest window height the page layout supports.
pub const MIN_WINDOW_HEIGHT: u32 = 480;

// Compile-time validation
const _: () = {
    assert!(MIN_WINDOW_WIDTH <= DEFAULT_WINDOW_WIDTH);
    assert!(MIN_WINDOW_HEIGHT <= DEFAULT_WINDOW_HEIGHT);
};
