// SPDX-License-Identifier: MPL-2.0
//! Window icon.
//!
//! The Data Store logo is rasterized at runtime into an RGBA buffer for the
//! window title bar. Rendering problems yield `None` and the platform icon.

use crate::ui::icons::LOGO_SVG;
use iced::window::{icon, Icon};
use resvg::usvg;

/// Edge length of the rasterized icon in pixels.
pub const ICON_SIZE: u32 = 128;

/// Rasterize the logo to a square RGBA buffer, keeping its aspect ratio.
pub fn load_window_icon() -> Option<Icon> {
    let (rgba, size) = rasterize_logo(ICON_SIZE)?;
    icon::from_rgba(rgba, size, size).ok()
}

fn rasterize_logo(target: u32) -> Option<(Vec<u8>, u32)> {
    let tree = match usvg::Tree::from_data(LOGO_SVG, &usvg::Options::default()) {
        Ok(tree) => tree,
        Err(err) => {
            tracing::warn!(%err, "window icon could not be parsed");
            return None;
        }
    };

    let size = tree.size();
    let scale = (target as f32 / size.width()).min(target as f32 / size.height());
    let offset_x = (target as f32 - size.width() * scale) / 2.0;
    let offset_y = (target as f32 - size.height() * scale) / 2.0;
    let transform =
        tiny_skia::Transform::from_scale(scale, scale).post_translate(offset_x, offset_y);

    let mut pixmap = tiny_skia::Pixmap::new(target, target)?;
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    Some((pixmap.take(), target))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_rasterizes_to_square_buffer() {
        let (rgba, size) = rasterize_logo(ICON_SIZE).expect("logo should render");
        assert_eq!(size, ICON_SIZE);
        assert_eq!(rgba.len(), (ICON_SIZE * ICON_SIZE * 4) as usize);
        assert!(rgba.iter().any(|&byte| byte != 0), "icon should not be blank");
    }

    #[test]
    fn window_icon_is_available() {
        assert!(load_window_icon().is_some());
    }
}
