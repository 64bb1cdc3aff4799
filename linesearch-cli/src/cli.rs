use std::path::PathBuf;

use clap::{Parser, Subcommand};
use linesearch::{MatchStrategy, SearchError};

use crate::output::OutputFormat;

/// linesearch - search a line-oriented text dataset
#[derive(Parser)]
#[command(name = "linesearch", version, about)]
pub struct Cli {
    /// Path to the dataset file, one record per line.
    #[arg(long, env = "LINESEARCH_DATA")]
    pub data: PathBuf,

    /// Path to a TOML configuration file.
    #[arg(long, env = "LINESEARCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Defaults to the interactive menu.
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Start the interactive menu.
    Menu,
    /// Run a single query and print the matches.
    Search(SearchCommand),
    /// Print every record in original order.
    List,
}

#[derive(Parser)]
pub struct SearchCommand {
    /// Matching strategy: ALL, ANY or NONE. Defaults to the configured strategy.
    #[arg(long, short, value_parser = parse_strategy)]
    pub strategy: Option<MatchStrategy>,

    /// Query terms.
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub query: Vec<String>,
}

fn parse_strategy(s: &str) -> Result<MatchStrategy, String> {
    s.parse().map_err(|e: SearchError| e.to_string())
}
