//! One-shot conversion of the source image into the application icons.
//!
//! A run checks for `NEW-updated.png`, decodes it once, writes `app_icon.ico`,
//! then writes `icon_256.png`. The first failure ends the run, so a failed ICO
//! means no PNG is attempted. Nothing is rolled back.

use crate::error::{ErrorKind, IconError, Result};
use crate::icon::{
    ArtifactKind, ICON_SIZES, PNG_SIZE, SOURCE_FILE_NAME, SourceImage, create_ico_file,
    create_png_file,
};
use std::path::{Path, PathBuf};

/// Directory that the fixed file names resolve against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLayout {
    dir: PathBuf,
}

impl OutputLayout {
    /// Resolve names against `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Resolve names relative to the process working directory.
    pub fn current_dir() -> Self {
        Self::new(".")
    }

    /// Directory holding the source and outputs.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Location of `NEW-updated.png`.
    pub fn source_path(&self) -> PathBuf {
        self.dir.join(SOURCE_FILE_NAME)
    }

    /// Location of the given output file.
    pub fn artifact_path(&self, kind: ArtifactKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

/// A file written by a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    /// What was written
    pub kind: ArtifactKind,
    /// Where it was written
    pub path: PathBuf,
}

/// Receives progress as a run advances.
///
/// Calls arrive in order, so a reporter printing each one reproduces the run's
/// history even when a later step fails.
pub trait Reporter {
    /// An output file was written.
    fn generated(&self, artifact: &GeneratedArtifact);

    /// The source image does not exist. No outputs were touched.
    fn missing_source(&self, path: &Path);

    /// The run stopped on a processing error.
    fn failed(&self, error: &IconError);
}

/// How a [`IconConverter::run`] ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Both files were written.
    Completed(Vec<GeneratedArtifact>),
    /// Nothing to convert.
    MissingSource(PathBuf),
    /// A step failed; earlier artifacts stay on disk.
    Failed(IconError),
}

impl RunOutcome {
    /// Whether every output was produced.
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }
}

/// Converts the fixed source image into the fixed set of outputs.
#[derive(Debug, Clone)]
pub struct IconConverter {
    layout: OutputLayout,
}

impl IconConverter {
    /// Converter over an explicit layout.
    pub fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }

    /// Converter over the process working directory.
    pub fn in_current_dir() -> Self {
        Self::new(OutputLayout::current_dir())
    }

    /// The directory this converter reads and writes.
    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Runs the conversion and returns the first error.
    ///
    /// Each artifact is handed to `reporter` as soon as it is written.
    /// Failures are returned, never reported, so callers choose how to
    /// present them.
    pub fn convert(&self, reporter: &dyn Reporter) -> Result<Vec<GeneratedArtifact>> {
        let source_path = self.layout.source_path();
        if !source_path.exists() {
            return Err(IconError::MissingSource { path: source_path });
        }

        let source = SourceImage::open(&source_path)?;
        let mut generated = Vec::with_capacity(2);

        let ico_path = self.layout.artifact_path(ArtifactKind::Ico);
        create_ico_file(&source, &ICON_SIZES, &ico_path)?;
        generated.push(self.record(ArtifactKind::Ico, ico_path, reporter));

        let png_path = self.layout.artifact_path(ArtifactKind::Png);
        create_png_file(&source, PNG_SIZE, &png_path)?;
        generated.push(self.record(ArtifactKind::Png, png_path, reporter));

        Ok(generated)
    }

    /// Runs the conversion, reporting every outcome instead of returning it
    /// as an error.
    pub fn run(&self, reporter: &dyn Reporter) -> RunOutcome {
        match self.convert(reporter) {
            Ok(generated) => RunOutcome::Completed(generated),
            Err(error) => match error.kind() {
                ErrorKind::MissingSourceFile => {
                    let path = self.layout.source_path();
                    log::info!("Source image missing: {}", path.display());
                    reporter.missing_source(&path);
                    RunOutcome::MissingSource(path)
                }
                ErrorKind::ProcessingFailure => {
                    log::info!("Icon conversion failed: {}", error);
                    reporter.failed(&error);
                    RunOutcome::Failed(error)
                }
            },
        }
    }

    fn record(
        &self,
        kind: ArtifactKind,
        path: PathBuf,
        reporter: &dyn Reporter,
    ) -> GeneratedArtifact {
        let artifact = GeneratedArtifact { kind, path };
        reporter.generated(&artifact);
        artifact
    }
}
