use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::info;

use crate::error::{Error, Result};

/// The decoded source artwork, held as RGBA for the whole run.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub pixels: RgbaImage,
}

impl SourceImage {
    /// Open and decode `path`.
    ///
    /// A path that does not exist yields [`Error::MissingSource`] before any
    /// decoding is attempted; anything the decoder rejects yields
    /// [`Error::Decode`].
    pub fn open(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::MissingSource {
                path: path.to_path_buf(),
            });
        }

        info!("Loading image: {:?}", path);
        let pixels = ImageReader::open(path)?
            .with_guessed_format()?
            .decode()
            .map_err(|source| Error::Decode {
                path: path.to_path_buf(),
                source,
            })?
            .to_rgba8();
        info!("Image loaded: {}x{}", pixels.width(), pixels.height());

        Ok(Self { pixels })
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn missing_file_is_reported_as_such() {
        let err = SourceImage::open(Path::new("/nonexistent/droidicon/source.jpg")).unwrap_err();
        assert!(matches!(err, Error::MissingSource { .. }));
    }

    #[test]
    fn undecodable_file_is_a_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let err = SourceImage::open(&path).unwrap_err();
        assert!(matches!(err, Error::Decode { .. }), "got {err:?}");
    }

    #[test]
    fn decodes_png_to_rgba() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        RgbaImage::from_pixel(30, 20, Rgba([1, 2, 3, 255]))
            .save(&path)
            .unwrap();

        let source = SourceImage::open(&path).unwrap();
        assert_eq!(source.dimensions(), (30, 20));
        assert_eq!(*source.pixels.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
    }
}
