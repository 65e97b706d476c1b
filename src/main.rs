use anyhow::{Context, Result};
use clap::Parser;
use std::env;
use std::io;

use length_report::cli::Cli;

fn main() -> Result<()> {
    Cli::parse();

    let cwd = env::current_dir().context("failed to determine current directory")?;
    let stdout = io::stdout();
    length_report::run_in(&cwd, &mut stdout.lock())
}
