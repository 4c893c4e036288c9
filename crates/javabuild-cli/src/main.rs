//! javabuild CLI
//!
//! Command-line interface for rendering packaging recipe resource variables.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

use anyhow::Result;
use clap::Parser;
use javabuild_cli::cli::Cli;

fn main() -> Result<()> {
    let args = Cli::parse();

    javabuild_cli::logging::init(args.verbose);

    javabuild_cli::commands::run(args.command)?;
    Ok(())
}
