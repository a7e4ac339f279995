use cosmic_text::{Attrs, Buffer, Color, Family, Metrics, Shaping, SwashCache, Wrap};
use image::{Pixel, Rgba, RgbaImage, imageops};
use tracing::debug;

use crate::core::fonts::ResolvedFont;
use crate::core::processing::padding::TRANSPARENT;

/// Extra canvas height below the icon, as a fraction of the icon side.
pub const LABEL_BAND_RATIO: f64 = 0.25;
/// Font size as a fraction of the icon side.
pub const FONT_SIZE_RATIO: f64 = 0.15;
pub const MIN_FONT_SIZE: f32 = 12.0;

pub const OUTLINE_COLOR: [u8; 4] = [0, 0, 0, 200];
pub const TEXT_COLOR: [u8; 4] = [255, 255, 255, 255];

/// Neighbour offsets of the outline pass.
const OUTLINE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// An icon with its label drawn in a band underneath.
#[derive(Debug, Clone)]
pub struct LabelOverlay {
    pub image: RgbaImage,
    /// Top-left of the label's bounding box on `image`.
    pub text_origin: (i32, i32),
    /// Measured width and height of the shaped label.
    pub text_size: (u32, u32),
}

pub fn label_band_height(icon_side: u32) -> u32 {
    (icon_side as f64 * LABEL_BAND_RATIO) as u32
}

pub fn label_font_size(icon_side: u32) -> f32 {
    ((icon_side as f64 * FONT_SIZE_RATIO).floor() as f32).max(MIN_FONT_SIZE)
}

/// Offset of a `text_len` span centered in `space`, floored like integer
/// division even when the text overflows.
fn centered_offset(space: u32, text_len: u32) -> i32 {
    (space as i32 - text_len as i32).div_euclid(2)
}

/// Draw `text` centered in a band below `icon`.
///
/// The canvas is `icon_side` wide and `icon_side + band` tall, transparent
/// except for the icon pasted at the top and the label. The label is drawn
/// with a one-pixel dark outline (eight offset passes) under the white text.
pub fn compose_label(
    icon: &RgbaImage,
    text: &str,
    icon_side: u32,
    font: &mut ResolvedFont,
) -> LabelOverlay {
    let band = label_band_height(icon_side);
    let mut canvas = RgbaImage::from_pixel(icon_side, icon_side + band, TRANSPARENT);
    imageops::replace(&mut canvas, icon, 0, 0);

    let font_size = label_font_size(icon_side);
    let mut cache = SwashCache::new();
    let mut buffer = Buffer::new(&mut font.font_system, Metrics::new(font_size, font_size));
    let mut buffer = buffer.borrow_with(&mut font.font_system);

    buffer.set_size(None, None);
    buffer.set_wrap(Wrap::None);
    let attrs = match font.family.as_deref() {
        Some(name) => Attrs::new().family(Family::Name(name)),
        None => Attrs::new(),
    };
    buffer.set_text(text, &attrs, Shaping::Advanced);
    buffer.shape_until_scroll(false);

    let (text_width, text_height) = buffer.layout_runs().fold((0.0f32, 0.0f32), |(w, h), run| {
        (w.max(run.line_w), h.max(run.line_top + run.line_height))
    });
    let text_size = (text_width.ceil() as u32, text_height.ceil() as u32);

    let x = centered_offset(icon_side, text_size.0);
    let y = icon_side as i32 + centered_offset(band, text_size.1);
    debug!(
        "Label {:?}: {}x{} at ({}, {}), font size {}",
        text, text_size.0, text_size.1, x, y, font_size
    );

    for (dx, dy) in OUTLINE_OFFSETS {
        buffer.draw(&mut cache, rgba_color(OUTLINE_COLOR), |gx, gy, w, h, color| {
            blend_rect(&mut canvas, x + dx + gx, y + dy + gy, w, h, color, OUTLINE_COLOR[3]);
        });
    }
    buffer.draw(&mut cache, rgba_color(TEXT_COLOR), |gx, gy, w, h, color| {
        blend_rect(&mut canvas, x + gx, y + gy, w, h, color, TEXT_COLOR[3]);
    });

    LabelOverlay {
        image: canvas,
        text_origin: (x, y),
        text_size,
    }
}

fn rgba_color([r, g, b, a]: [u8; 4]) -> Color {
    Color::rgba(r, g, b, a)
}

/// Blend a glyph coverage rectangle onto `canvas`, clipping at the edges.
/// The rasterizer reports coverage in the alpha channel; `pass_alpha` scales it.
fn blend_rect(canvas: &mut RgbaImage, x: i32, y: i32, w: u32, h: u32, color: Color, pass_alpha: u8) {
    let [r, g, b, coverage] = color.as_rgba();
    let alpha = (coverage as u32 * pass_alpha as u32 / 255) as u8;
    if alpha == 0 {
        return;
    }
    let top = Rgba([r, g, b, alpha]);
    for py in y..y + h as i32 {
        for px in x..x + w as i32 {
            if px < 0 || py < 0 {
                continue;
            }
            if let Some(pixel) = canvas.get_pixel_mut_checked(px as u32, py as u32) {
                pixel.blend(&top);
            }
        }
    }
}
