use image::{Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::core::processing::resize::{FitGeometry, fit_geometry, resize_rgba};
use crate::error::Result;

pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Paste `img` onto a fully transparent `side x side` canvas at the given
/// offsets. Pixels are replaced, not blended, so the pasted region keeps the
/// source alpha exactly.
pub fn center_on_canvas(img: &RgbaImage, side: u32, offset_x: u32, offset_y: u32) -> RgbaImage {
    debug!(
        "Centering {}x{} on {}x{} canvas at ({}, {})",
        img.width(),
        img.height(),
        side,
        side,
        offset_x,
        offset_y
    );
    let mut canvas = RgbaImage::from_pixel(side, side, TRANSPARENT);
    imageops::replace(&mut canvas, img, offset_x as i64, offset_y as i64);
    canvas
}

/// Scale `src` to fit a `side` square, preserving aspect ratio, and center it
/// on a transparent canvas. Always returns a `side x side` buffer.
pub fn render_icon(src: &RgbaImage, side: u32) -> Result<RgbaImage> {
    let (icon, _) = render_icon_with_geometry(src, side)?;
    Ok(icon)
}

/// As [`render_icon`], also returning the placement that was used.
pub fn render_icon_with_geometry(src: &RgbaImage, side: u32) -> Result<(RgbaImage, FitGeometry)> {
    let geometry = fit_geometry(src.width(), src.height(), side)?;
    let resized = resize_rgba(src, geometry.scaled_width, geometry.scaled_height)?;
    let icon = center_on_canvas(&resized, side, geometry.offset_x, geometry.offset_y);
    Ok((icon, geometry))
}
