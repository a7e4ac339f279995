use std::path::Path;

use image::{ImageFormat, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// Write `img` as a PNG, replacing any existing file.
pub fn write_png(output: &Path, img: &RgbaImage) -> Result<()> {
    img.save_with_format(output, ImageFormat::Png)
        .map_err(|source| Error::Encode {
            path: output.to_path_buf(),
            source,
        })?;
    info!("  Saved: {:?}", output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn writes_decodable_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ic_launcher.png");
        let img = RgbaImage::from_pixel(8, 8, Rgba([0, 0, 0, 0]));

        write_png(&path, &img).unwrap();
        let back = image::open(&path).unwrap().to_rgba8();
        assert_eq!(back, img);
    }

    #[test]
    fn missing_directory_is_an_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent").join("ic_launcher.png");
        let img = RgbaImage::new(2, 2);
        assert!(matches!(write_png(&path, &img), Err(Error::Encode { .. })));
    }
}
