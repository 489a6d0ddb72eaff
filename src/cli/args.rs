//! Command line argument parsing.
//!
//! The tool takes no positional inputs; source and output names are fixed.
//! Flags only tune diagnostics.

use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Generate application icons from NEW-updated.png
#[derive(Parser, Debug, Default)]
#[command(
    name = "icon_forge",
    version,
    about = "Generate app_icon.ico and icon_256.png from NEW-updated.png",
    long_about = "Convert NEW-updated.png in the current directory into:
  app_icon.ico   ICO with 16, 32, 48, 64, 128 and 256 px frames
  icon_256.png   256x256 PNG (Lanczos3)

Existing outputs are overwritten. The exit status is always 0; problems are
reported on stdout."
)]
pub struct Args {
    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace); errors only by default
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Log level selected by the verbosity flags.
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Error,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Default log filter when `RUST_LOG` is unset
    pub log_level: LevelFilter,
    /// Whether console lines may carry color
    pub color: ColorChoice,
}

impl RuntimeConfig {
    /// Color only when stdout is an interactive terminal.
    pub fn detect_color() -> ColorChoice {
        if std::io::stdout().is_terminal() {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        }
    }
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            log_level: args.log_level(),
            color: Self::detect_color(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_parse() {
        let args = Args::try_parse_from(["icon_forge"]).unwrap();
        assert_eq!(args.verbose, 0);
        assert_eq!(args.log_level(), LevelFilter::Error);
    }

    #[test]
    fn test_verbose_flag_counts() {
        let args = Args::try_parse_from(["icon_forge", "-v"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Info);

        let args = Args::try_parse_from(["icon_forge", "-vv"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Debug);

        let args = Args::try_parse_from(["icon_forge", "-v", "-v", "-v", "-v"]).unwrap();
        assert_eq!(args.log_level(), LevelFilter::Trace);
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Args::try_parse_from(["icon_forge", "other.png"]).is_err());
    }

    #[test]
    fn test_args_verify() {
        use clap::CommandFactory;
        Args::command().debug_assert();
    }
}
