use std::io::{self, IsTerminal, Write};

use anyhow::Result;
use linesearch::{Engine, MatchStrategy, Query};

use crate::input::{BufReadInput, LineInput, ReadlineInput};
use crate::output::{self, OutputFormat};

enum Flow {
    Continue,
    Exit,
}

/// Run the interactive menu on stdin and stdout.
pub fn run_stdin(engine: &Engine, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if io::stdin().is_terminal() {
        let mut input = ReadlineInput::new()?;
        run(engine, &mut input, &mut out, format)
    } else {
        let mut input = BufReadInput::new(io::stdin().lock());
        run(engine, &mut input, &mut out, format)
    }
}

/// Run the menu loop until the user exits or the input ends.
pub fn run<I: LineInput, W: Write>(
    engine: &Engine,
    input: &mut I,
    out: &mut W,
    format: OutputFormat,
) -> Result<()> {
    loop {
        writeln!(
            out,
            "\n=== Menu ===\n1. Search information.\n2. Print all data.\n0. Exit."
        )?;
        let Some(choice) = next_answer(input, out)? else {
            break;
        };

        let flow = match choice.as_str() {
            "1" => search(engine, input, out, format)?,
            "2" => {
                output::print_records(out, engine.records(), format)?;
                Flow::Continue
            }
            "0" => Flow::Exit,
            other => {
                log::debug!("unknown menu option '{other}'");
                writeln!(out, "\nIncorrect option! Try again.")?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            break;
        }
    }

    writeln!(out, "\nBye!")?;
    out.flush()?;
    Ok(())
}

fn search<I: LineInput, W: Write>(
    engine: &Engine,
    input: &mut I,
    out: &mut W,
    format: OutputFormat,
) -> Result<Flow> {
    writeln!(out, "Select a matching strategy: ALL, ANY, NONE")?;
    let Some(answer) = next_answer(input, out)? else {
        return Ok(Flow::Exit);
    };
    let strategy = match answer.parse::<MatchStrategy>() {
        Ok(strategy) => strategy,
        Err(err) => {
            log::debug!("{err}");
            writeln!(out, "Invalid search strategy.")?;
            return Ok(Flow::Continue);
        }
    };

    writeln!(out, "\nEnter a name or email to search all suitable people.")?;
    out.flush()?;
    let Some(line) = input.read_line()? else {
        return Ok(Flow::Exit);
    };
    let query = Query::parse(&line);

    let matches = engine.search(strategy, &query);
    output::print_matches(out, strategy, &query, &matches, format)?;
    Ok(Flow::Continue)
}

/// Read the next non-blank line, trimmed.
fn next_answer<I: LineInput, W: Write>(input: &mut I, out: &mut W) -> Result<Option<String>> {
    out.flush()?;
    while let Some(line) = input.read_line()? {
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
    }
    Ok(None)
}
