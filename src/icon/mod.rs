//! Icon format conversion.
//!
//! Loads the source PNG once and renders it into the two application icon
//! artifacts:
//!
//! | Output | Format | Sizes |
//! |--------|--------|-------|
//! | `app_icon.ico` | ICO | 16, 32, 48, 64, 128, 256 |
//! | `icon_256.png` | PNG | 256 |
//!
//! Every rendition is an exact square resize with Lanczos3 filtering. Sources
//! that are not square are stretched rather than cropped.

use image::imageops::FilterType;

mod ico_file;
mod png_file;
mod rgba;
mod source;

pub use ico_file::{create_ico_file, ico_frame_sizes};
pub use png_file::create_png_file;
pub use rgba::{IconRgba, load_rgba};
pub use source::SourceImage;

/// Source image name, resolved against the output directory.
pub const SOURCE_FILE_NAME: &str = "NEW-updated.png";

/// Multi-resolution icon container name.
pub const ICO_FILE_NAME: &str = "app_icon.ico";

/// Resized PNG name.
pub const PNG_FILE_NAME: &str = "icon_256.png";

/// Frame sizes embedded in the ICO, smallest first.
pub const ICON_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

/// Edge length of the standalone PNG.
pub const PNG_SIZE: u32 = 256;

/// Resampling filter for every rendition.
pub const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Kind of a generated output file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Multi-resolution ICO container
    Ico,
    /// Single-size PNG
    Png,
}

impl ArtifactKind {
    /// Fixed file name for this artifact.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Ico => ICO_FILE_NAME,
            ArtifactKind::Png => PNG_FILE_NAME,
        }
    }
}
