//! CLI entry point for the tile set utilities

use clap::Parser;
use std::process::ExitCode;
use tilesmith::io::cli::{Cli, TilesetProcessor};

// Allow print for reporting the failure reason to the user
#[allow(clippy::print_stderr)]
fn main() -> ExitCode {
    env_logger::init();

    let processor = TilesetProcessor::new(Cli::parse());
    match processor.process() {
        Ok(_) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}
