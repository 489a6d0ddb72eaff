//! Console output for conversion runs.
//!
//! Every report is one plain line on stdout. Color is only layered on when
//! the configured [`ColorChoice`] allows it.

use crate::converter::{GeneratedArtifact, Reporter};
use crate::error::{IconError, display_name};
use std::io::Write;
use std::path::Path;
use termcolor::{BufferWriter, Color, ColorChoice, ColorSpec, WriteColor};

/// Output manager for console lines
#[derive(Debug)]
pub struct OutputManager {
    bufwtr: BufferWriter,
}

impl OutputManager {
    /// Create a new output manager writing to stdout
    pub fn new(color: ColorChoice) -> Self {
        Self {
            bufwtr: BufferWriter::stdout(color),
        }
    }

    /// Print a success line
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.colored_line(ColorSpec::new().set_fg(Some(Color::Green)), message)
    }

    /// Print an error line.
    ///
    /// Errors share stdout with the rest of the report.
    pub fn error(&self, message: &str) -> std::io::Result<()> {
        self.colored_line(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true), message)
    }

    fn colored_line(&self, spec: &ColorSpec, message: &str) -> std::io::Result<()> {
        let mut buffer = self.bufwtr.buffer();
        let _ = buffer.set_color(spec);
        write!(&mut buffer, "{}", message)?;
        let _ = buffer.reset();
        writeln!(&mut buffer)?;
        self.bufwtr.print(&buffer)
    }
}

/// Text of the line reporting a written artifact.
pub fn generated_line(artifact: &GeneratedArtifact) -> String {
    format!("Generated {}", artifact.kind.file_name())
}

/// Text of the line reporting a missing source.
pub fn missing_source_line(path: &Path) -> String {
    format!("Error: {} not found.", display_name(path))
}

/// Text of the line reporting a processing failure.
pub fn failure_line(error: &IconError) -> String {
    format!("Error processing image: {}", error)
}

impl Reporter for OutputManager {
    fn generated(&self, artifact: &GeneratedArtifact) {
        if let Err(e) = self.success(&generated_line(artifact)) {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }

    fn missing_source(&self, path: &Path) {
        if let Err(e) = self.error(&missing_source_line(path)) {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }

    fn failed(&self, error: &IconError) {
        if let Err(e) = self.error(&failure_line(error)) {
            log::warn!("Failed to write to stdout: {}", e);
        }
    }
}
