//! Resized PNG output.

use crate::error::Result;
use image::{DynamicImage, ImageFormat};
use std::path::Path;

use super::SourceImage;

/// Resizes the source to `size` x `size` and saves it as PNG at `output`.
///
/// The format is fixed to PNG regardless of the output extension. An
/// existing file is overwritten.
pub fn create_png_file(source: &SourceImage, size: u32, output: &Path) -> Result<()> {
    let resized = DynamicImage::ImageRgba8(source.resized_rgba(size, size));
    resized.save_with_format(output, ImageFormat::Png)?;

    log::info!("Created PNG file: {} ({}x{})", output.display(), size, size);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IconError;
    use crate::icon::test_support::write_gradient_png;

    #[test]
    fn test_create_png_file_is_exact_size() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("source.png");
        write_gradient_png(&src, 640, 360);
        let source = SourceImage::open(&src).unwrap();

        let out = dir.path().join("icon_256.png");
        create_png_file(&source, 256, &out).unwrap();

        let written = image::open(&out).unwrap();
        assert_eq!((written.width(), written.height()), (256, 256));
        assert_eq!(
            image::ImageFormat::from_path(&out).unwrap(),
            ImageFormat::Png
        );
    }

    #[test]
    fn test_create_png_file_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("source.png");
        write_gradient_png(&src, 32, 32);
        let source = SourceImage::open(&src).unwrap();

        let out = dir.path().join("missing").join("icon_256.png");
        let err = create_png_file(&source, 256, &out).unwrap_err();
        assert!(matches!(err, IconError::Image(_)));
    }
}
