//! AUTOCROP CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! in-place crop, and report the outcome on stdout.
//! For programmatic use, prefer the library API (`autocrop::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
