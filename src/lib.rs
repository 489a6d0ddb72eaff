//! # icon_forge
//!
//! Application icon generation from a single source PNG.
//!
//! One run reads `NEW-updated.png` from the working directory and writes:
//!
//! - `app_icon.ico` with frames at 16, 32, 48, 64, 128 and 256 pixels
//! - `icon_256.png`, a 256x256 Lanczos3 downscale
//!
//! ## Usage
//!
//! ```bash
//! icon_forge        # convert, report on stdout
//! icon_forge -vv    # same, with debug logs on stderr
//! ```
//!
//! ## Library
//!
//! ```no_run
//! use icon_forge::{IconConverter, OutputLayout, cli::OutputManager};
//! use termcolor::ColorChoice;
//!
//! let converter = IconConverter::new(OutputLayout::new("assets"));
//! let outcome = converter.run(&OutputManager::new(ColorChoice::Never));
//! assert!(outcome.is_completed());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod cli;
pub mod converter;
pub mod error;
pub mod icon;

pub use converter::{GeneratedArtifact, IconConverter, OutputLayout, Reporter, RunOutcome};
pub use error::{ErrorKind, IconError, Result};
pub use icon::{ArtifactKind, IconRgba, SourceImage};
