use std::io::{self, Write};

use anyhow::Result;
use linesearch::{Engine, Query};

use crate::cli::SearchCommand;
use crate::output::{self, OutputFormat};

/// Execute a single search and print the matches.
pub fn run(cmd: SearchCommand, engine: &Engine, format: OutputFormat) -> Result<()> {
    let strategy = cmd
        .strategy
        .unwrap_or(engine.config().default_strategy);
    let query = Query::parse(&cmd.query.join(" "));

    let matches = engine.search(strategy, &query);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::print_matches(&mut out, strategy, &query, &matches, format)?;
    out.flush()?;
    Ok(())
}
