//! icon_forge - turn NEW-updated.png into app_icon.ico and icon_256.png.

use icon_forge::cli;
use std::process;

fn main() {
    process::exit(cli::run());
}
