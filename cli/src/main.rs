use std::fs;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;

mod args;

use args::Cli;
use cli::repl;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = io::stdout();
    match &cli.file {
        Some(path) => {
            let file =
                fs::File::open(path).with_context(|| format!("failed to open {path}"))?;
            repl::run(BufReader::new(file), &mut stdout.lock())?;
        }
        None => {
            let stdin = io::stdin();
            repl::run(stdin.lock(), &mut stdout.lock())?;
        }
    }
    Ok(())
}
