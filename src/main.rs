//! CLI entry point for the arena level generation demo

use arenagen::io::cli::{Cli, run};
use arenagen::io::logging;
use clap::Parser;

fn main() -> arenagen::Result<()> {
    let cli = Cli::parse();
    logging::init(logging::level_for(cli.verbose, cli.quiet))?;
    run(&cli)?;
    Ok(())
}
