//! ICO icon file creation.
//!
//! Renders the source into every requested square size and packs the frames
//! into one container:
//! - 16x16: window title bars, small icons
//! - 32x32: standard icons
//! - 48x48: large icon view
//! - 64x64, 128x128: extra large icons
//! - 256x256: high-res icons (stored PNG-compressed by the `ico` crate)

use crate::error::{ErrorExt, IconError, Result};
use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use super::SourceImage;

/// Create an ICO file holding one frame per entry in `sizes`.
///
/// Frames are written in the order given. An existing file at `output` is
/// overwritten.
///
/// # Example
/// ```no_run
/// use icon_forge::icon::{ICON_SIZES, SourceImage, create_ico_file};
/// use std::path::Path;
///
/// let source = SourceImage::open(Path::new("NEW-updated.png"))?;
/// create_ico_file(&source, &ICON_SIZES, Path::new("app_icon.ico"))?;
/// # Ok::<(), icon_forge::IconError>(())
/// ```
pub fn create_ico_file(source: &SourceImage, sizes: &[u32], output: &Path) -> Result<()> {
    let mut icon_dir = IconDir::new(ResourceType::Icon);

    for &size in sizes {
        log::debug!("Adding {}x{} frame from {}", size, size, source.path().display());

        let rgba = source.resized_rgba(size, size);
        let icon_image = IconImage::from_rgba_data(size, size, rgba.into_raw());

        let entry =
            IconDirEntry::encode(&icon_image).map_err(|e| IconError::Encode { size, source: e })?;
        icon_dir.add_entry(entry);
    }

    let file = File::create(output).fs_context("creating ICO output file", output)?;
    let mut writer = BufWriter::new(file);
    icon_dir
        .write(&mut writer)
        .fs_context("writing ICO data to", output)?;
    writer.flush().fs_context("flushing ICO data to", output)?;

    log::info!("Created ICO file: {}", output.display());
    Ok(())
}

/// Lists the `(width, height)` of every frame in an ICO file, in file order.
pub fn ico_frame_sizes(path: &Path) -> Result<Vec<(u32, u32)>> {
    let file = File::open(path).fs_context("opening ICO file", path)?;
    let icon_dir = IconDir::read(BufReader::new(file)).fs_context("reading ICO directory", path)?;

    Ok(icon_dir
        .entries()
        .iter()
        .map(|entry| (entry.width(), entry.height()))
        .collect())
}
