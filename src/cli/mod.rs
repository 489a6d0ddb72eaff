//! Command line interface for icon_forge.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::{OutputManager, failure_line, generated_line, missing_source_line};

use crate::converter::IconConverter;

/// Main CLI entry point.
///
/// Returns the process exit code, which is always 0: outcomes are reported
/// on stdout only.
pub fn run() -> i32 {
    let args = Args::parse_args();
    let config = RuntimeConfig::from(&args);
    init_logging(&config);

    let output = OutputManager::new(config.color);
    let converter = IconConverter::in_current_dir();
    log::info!("Converting icons in {}", converter.layout().dir().display());
    let outcome = converter.run(&output);
    log::debug!("Run finished: {:?}", outcome);

    0
}

/// Set up `env_logger` on stderr. `RUST_LOG` overrides the flag-derived level.
pub fn init_logging(config: &RuntimeConfig) {
    let env = env_logger::Env::default().default_filter_or(config.log_level.as_str());
    let _ = env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .try_init();
}
