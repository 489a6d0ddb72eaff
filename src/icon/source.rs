//! Decoded source image.

use crate::error::{IconError, Result};
use image::{ColorType, DynamicImage, RgbaImage};
use std::path::{Path, PathBuf};

use super::RESIZE_FILTER;

/// A source image decoded into memory.
///
/// Owned by a single conversion run. Every rendition is resized from these
/// pixels, so the file is only read once.
#[derive(Debug, Clone)]
pub struct SourceImage {
    path: PathBuf,
    image: DynamicImage,
}

impl SourceImage {
    /// Opens and decodes the image at `path`.
    ///
    /// The format is guessed from the file contents, so a PNG with the wrong
    /// extension still loads. Anything the decoder rejects becomes
    /// [`IconError::Load`].
    pub fn open(path: &Path) -> Result<Self> {
        let image = image::open(path).map_err(|source| IconError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        log::debug!(
            "Loaded source {}x{} ({:?}) from {}",
            image.width(),
            image.height(),
            image.color(),
            path.display()
        );

        Ok(Self {
            path: path.to_path_buf(),
            image,
        })
    }

    /// Wraps an already decoded image.
    pub fn from_image(path: impl Into<PathBuf>, image: DynamicImage) -> Self {
        Self {
            path: path.into(),
            image,
        }
    }

    /// Path the image was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color mode of the decoded pixels.
    pub fn color(&self) -> ColorType {
        self.image.color()
    }

    /// Resizes to exactly `width` x `height` and converts to RGBA8.
    ///
    /// Aspect ratio is not preserved.
    pub fn resized_rgba(&self, width: u32, height: u32) -> RgbaImage {
        self.image
            .resize_exact(width, height, RESIZE_FILTER)
            .to_rgba8()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::icon::test_support::write_gradient_png;

    #[test]
    fn test_open_reports_dimensions_and_color() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        write_gradient_png(&path, 300, 200);

        let source = SourceImage::open(&path).unwrap();
        assert_eq!(source.width(), 300);
        assert_eq!(source.height(), 200);
        assert_eq!(source.color(), ColorType::Rgba8);
        assert_eq!(source.path(), path.as_path());
    }

    #[test]
    fn test_open_rejects_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("source.png");
        std::fs::write(&path, b"definitely not a png").unwrap();

        let err = SourceImage::open(&path).unwrap_err();
        assert!(matches!(err, IconError::Load { .. }));
        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
    }

    #[test]
    fn test_resized_rgba_stretches_non_square() {
        let source = SourceImage::from_image(
            "wide.png",
            DynamicImage::ImageRgb8(image::RgbImage::new(120, 30)),
        );

        let resized = source.resized_rgba(64, 64);
        assert_eq!(resized.dimensions(), (64, 64));
    }
}
