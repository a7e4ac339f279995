use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::debug;

use crate::error::{Error, Result};

/// Placement of a scaled source inside a square canvas.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FitGeometry {
    pub scaled_width: u32,
    pub scaled_height: u32,
    pub offset_x: u32,
    pub offset_y: u32,
}

impl FitGeometry {
    /// Uniform scale factor `min(side / width, side / height)`.
    pub fn scale(original_width: u32, original_height: u32, side: u32) -> f64 {
        (side as f64 / original_width as f64).min(side as f64 / original_height as f64)
    }

    /// True when the scaled image leaves no transparent border.
    pub fn covers(&self, side: u32) -> bool {
        self.scaled_width == side && self.scaled_height == side
    }
}

/// Compute the aspect-preserving size of `original` scaled to fit a `side`
/// square, and the offsets that center it.
///
/// The long side maps to `side` exactly; the short side is floored, never
/// below one pixel.
pub fn fit_geometry(original_width: u32, original_height: u32, side: u32) -> Result<FitGeometry> {
    if side == 0 {
        return Err(Error::ZeroSize { size: side });
    }
    if original_width == 0 || original_height == 0 {
        return Err(Error::Processing(format!(
            "source has an empty dimension: {}x{}",
            original_width, original_height
        )));
    }

    let long_side = original_width.max(original_height) as u64;
    let short_side = original_width.min(original_height) as u64;
    let new_short_side = ((short_side * side as u64) / long_side).max(1) as u32;

    let (scaled_width, scaled_height) = if original_width >= original_height {
        (side, new_short_side)
    } else {
        (new_short_side, side)
    };
    debug!(
        "Fit {}x{} into {}: scale {:.5}, scaled {}x{}",
        original_width,
        original_height,
        side,
        FitGeometry::scale(original_width, original_height, side),
        scaled_width,
        scaled_height
    );

    Ok(FitGeometry {
        scaled_width,
        scaled_height,
        offset_x: (side - scaled_width) / 2,
        offset_y: (side - scaled_height) / 2,
    })
}

/// Lanczos3 resize of an RGBA buffer.
pub fn resize_rgba(src: &RgbaImage, target_width: u32, target_height: u32) -> Result<RgbaImage> {
    let (width, height) = src.dimensions();
    if (width, height) == (target_width, target_height) {
        return Ok(src.clone());
    }

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(width, height, src.as_raw().to_vec(), PixelType::U8x4)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer.resize(&src_image, &mut dst_image, &resize_options)?;

    debug!(
        "Resized {}x{} -> {}x{}",
        width, height, target_width, target_height
    );

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Processing(format!(
            "resized buffer does not match {}x{}",
            target_width, target_height
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn wide_source_fills_width() {
        let geometry = fit_geometry(1024, 512, 96).unwrap();
        assert_eq!(FitGeometry::scale(1024, 512, 96), 0.09375);
        assert_eq!(
            geometry,
            FitGeometry {
                scaled_width: 96,
                scaled_height: 48,
                offset_x: 0,
                offset_y: 24,
            }
        );
    }

    #[test]
    fn tall_source_fills_height() {
        let geometry = fit_geometry(300, 900, 72).unwrap();
        assert_eq!(geometry.scaled_width, 24);
        assert_eq!(geometry.scaled_height, 72);
        assert_eq!((geometry.offset_x, geometry.offset_y), (24, 0));
    }

    #[test]
    fn square_source_has_no_offset() {
        let geometry = fit_geometry(500, 500, 48).unwrap();
        assert!(geometry.covers(48));
        assert_eq!((geometry.offset_x, geometry.offset_y), (0, 0));
    }

    #[test]
    fn aspect_ratio_within_one_pixel() {
        for &(w, h) in &[(1024u32, 768u32), (333, 1000), (1920, 1080), (7, 3)] {
            for side in [48u32, 72, 96, 144, 192] {
                let g = fit_geometry(w, h, side).unwrap();
                let expected_h = g.scaled_width as f64 * h as f64 / w as f64;
                let expected_w = g.scaled_height as f64 * w as f64 / h as f64;
                assert!(
                    (g.scaled_height as f64 - expected_h).abs() <= 1.0
                        || (g.scaled_width as f64 - expected_w).abs() <= 1.0,
                    "{}x{} -> {:?}",
                    w,
                    h,
                    g
                );
                assert!(g.scaled_width <= side && g.scaled_height <= side);
            }
        }
    }

    #[test]
    fn extreme_aspect_keeps_one_pixel() {
        let geometry = fit_geometry(10_000, 1, 48).unwrap();
        assert_eq!(geometry.scaled_height, 1);
        assert_eq!(geometry.offset_y, 23);
    }

    #[test]
    fn zero_side_is_rejected() {
        assert!(matches!(
            fit_geometry(10, 10, 0),
            Err(Error::ZeroSize { size: 0 })
        ));
    }

    #[test]
    fn resize_produces_requested_dimensions() {
        let src = RgbaImage::from_pixel(64, 32, Rgba([200, 100, 50, 255]));
        let out = resize_rgba(&src, 16, 8).unwrap();
        assert_eq!(out.dimensions(), (16, 8));
        // A uniform image stays uniform under convolution (fixed-point rounding aside).
        let expected = [200u8, 100, 50, 255];
        assert!(out.pixels().all(|p| {
            p.0.iter()
                .zip(expected)
                .all(|(&got, want)| got.abs_diff(want) <= 1)
        }));
    }
}
