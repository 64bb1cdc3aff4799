mod cli;
mod commands;
mod context;
mod input;
mod output;

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};
use crate::commands::{menu, search};

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with results.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;
    let engine = context::open_engine(&cli.data, cli.config.as_deref())?;

    match cli.command.unwrap_or(Command::Menu) {
        Command::Menu => menu::run_stdin(&engine, format),
        Command::Search(cmd) => search::run(cmd, &engine, format),
        Command::List => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            output::print_records(&mut out, engine.records(), format)?;
            out.flush()?;
            Ok(())
        }
    }
}
