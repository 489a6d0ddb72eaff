//! Raw RGBA loading for window and tray icons.

use crate::error::{IconError, Result};
use std::path::Path;

/// Straight RGBA8 pixels plus dimensions, the shape window-icon APIs take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRgba {
    /// Row-major RGBA8 bytes, `width * height * 4` long
    pub rgba: Vec<u8>,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl IconRgba {
    /// Decodes an in-memory image, e.g. one embedded with `include_bytes!`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            rgba: image.into_raw(),
            width,
            height,
        })
    }
}

/// Loads an image file as [`IconRgba`].
pub fn load_rgba(path: &Path) -> Result<IconRgba> {
    let image = image::open(path)
        .map_err(|source| IconError::Load {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgba8();
    let (width, height) = image.dimensions();

    Ok(IconRgba {
        rgba: image.into_raw(),
        width,
        height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::test_support::write_gradient_png;

    #[test]
    fn test_load_rgba_buffer_matches_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon_256.png");
        write_gradient_png(&path, 256, 256);

        let icon = load_rgba(&path).unwrap();
        assert_eq!((icon.width, icon.height), (256, 256));
        assert_eq!(icon.rgba.len(), 256 * 256 * 4);
    }

    #[test]
    fn test_from_bytes_agrees_with_file_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icon.png");
        write_gradient_png(&path, 40, 20);

        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(IconRgba::from_bytes(&bytes).unwrap(), load_rgba(&path).unwrap());
    }

    #[test]
    fn test_from_bytes_rejects_garbage() {
        assert!(IconRgba::from_bytes(b"\x89PNG truncated").is_err());
    }
}
