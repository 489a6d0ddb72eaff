//! Error types for icon conversion.
//!
//! Every failure of a conversion run lands in [`IconError`]. The console only
//! distinguishes two kinds (see [`ErrorKind`]): the source file is missing, or
//! something went wrong while loading, resizing or saving.
//!
//! # Example
//!
//! ```no_run
//! use icon_forge::error::{ErrorExt, Result};
//! use std::path::Path;
//!
//! fn read_source(path: &Path) -> Result<Vec<u8>> {
//!     std::fs::read(path).fs_context("reading source image", path)
//! }
//! ```

use std::{io, path::PathBuf};
use thiserror::Error as DeriveError;

/// Result type alias for icon conversion.
pub type Result<T> = std::result::Result<T, IconError>;

/// Errors returned while converting the source image.
#[derive(Debug, DeriveError)]
#[non_exhaustive]
pub enum IconError {
    /// The fixed source path does not exist.
    #[error("{} not found.", display_name(.path))]
    MissingSource {
        /// Path that was checked
        path: PathBuf,
    },

    /// The source exists but could not be decoded.
    #[error("loading source image {}: {source}", .path.display())]
    Load {
        /// Path of the source image
        path: PathBuf,
        /// Decoder error
        #[source]
        source: image::ImageError,
    },

    /// A single ICO frame could not be encoded.
    #[error("encoding {size}x{size} icon: {source}")]
    Encode {
        /// Square frame size in pixels
        size: u32,
        /// The underlying encoder error
        #[source]
        source: io::Error,
    },

    /// Resize or PNG encode failure.
    #[error("{0}")]
    Image(#[from] image::ImageError),

    /// File system error with path context.
    ///
    /// Created by the [`ErrorExt`] trait's `fs_context` method.
    #[error("{context} {path}: {error}")]
    Fs {
        /// Context describing the operation (e.g., "creating ICO output file")
        context: &'static str,
        /// Path that was being accessed
        path: PathBuf,
        /// The underlying I/O error
        error: io::Error,
    },
}

/// Coarse classification used for console reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source image is absent; reported, not fatal.
    MissingSourceFile,
    /// Decode, resize or encode failed.
    ProcessingFailure,
}

impl IconError {
    /// Returns the reporting kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            IconError::MissingSource { .. } => ErrorKind::MissingSourceFile,
            _ => ErrorKind::ProcessingFailure,
        }
    }
}

pub(crate) fn display_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Extension trait for filesystem operations with automatic path context.
pub trait ErrorExt<T> {
    /// Add filesystem context to an I/O error.
    ///
    /// The `context` should be a present-tense verb phrase describing the operation,
    /// e.g., "reading file", "creating ICO output file".
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl Into<PathBuf>) -> Result<T> {
        self.map_err(|error| IconError::Fs {
            context,
            path: path.into(),
            error,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_source_names_file_only() {
        let err = IconError::MissingSource {
            path: PathBuf::from("/tmp/work/NEW-updated.png"),
        };
        assert_eq!(err.to_string(), "NEW-updated.png not found.");
        assert_eq!(err.kind(), ErrorKind::MissingSourceFile);
    }

    #[test]
    fn test_fs_context_keeps_path_and_cause() {
        let result: std::result::Result<(), io::Error> =
            Err(io::Error::new(io::ErrorKind::PermissionDenied, "access denied"));
        let err = result
            .fs_context("creating ICO output file", "out/app_icon.ico")
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ProcessingFailure);
        let message = err.to_string();
        assert!(message.contains("creating ICO output file"));
        assert!(message.contains("app_icon.ico"));
        assert!(message.contains("access denied"));
    }

    #[test]
    fn test_encode_error_names_frame_size() {
        let err = IconError::Encode {
            size: 48,
            source: io::Error::other("bad frame"),
        };
        assert_eq!(err.to_string(), "encoding 48x48 icon: bad frame");
    }
}
