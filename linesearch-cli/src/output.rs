use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use linesearch::{Dataset, MatchSet, MatchStrategy, Query};
use serde_json::json;

/// Output format for CLI results.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One record per line.
    Plain,
    /// JSON output.
    Json,
}

/// Print the records selected by a query.
pub fn print_matches<W: Write>(
    out: &mut W,
    strategy: MatchStrategy,
    query: &Query,
    matches: &MatchSet<'_>,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "strategy": strategy.as_str(),
                "query": query.to_string(),
                "count": matches.len(),
                "matches": matches
                    .iter()
                    .map(|(position, text)| json!({ "position": position, "text": text }))
                    .collect::<Vec<_>>(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Plain => {
            if matches.is_empty() {
                writeln!(out, "No matching people found.")?;
                return Ok(());
            }

            writeln!(out, "{} persons found.", matches.len())?;
            for (_, text) in matches.iter() {
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}

/// Print every record in original order.
pub fn print_records<W: Write>(out: &mut W, dataset: &Dataset, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let output = json!({
                "count": dataset.len(),
                "records": dataset
                    .iter_positions()
                    .map(|(position, text)| json!({ "position": position, "text": text }))
                    .collect::<Vec<_>>(),
            });
            writeln!(out, "{}", serde_json::to_string_pretty(&output)?)?;
        }
        OutputFormat::Plain => {
            writeln!(out, "=== List of people ===")?;
            for text in dataset.iter() {
                writeln!(out, "{text}")?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use linesearch::{Engine, SearchConfig};

    use super::*;

    fn engine() -> Engine {
        let dataset = Dataset::from_records(["Ann Smith", "Bob Ann Jones", "Carol White"]);
        Engine::new(dataset, SearchConfig::default()).unwrap()
    }

    fn render(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_matches() {
        let engine = engine();
        let query = Query::parse("ann");
        let matches = engine.search(MatchStrategy::Any, &query);
        let text = render(|out| {
            print_matches(out, MatchStrategy::Any, &query, &matches, OutputFormat::Plain)
        });
        assert_eq!(text, "2 persons found.\nAnn Smith\nBob Ann Jones\n");
    }

    #[test]
    fn test_plain_no_matches() {
        let engine = engine();
        let query = Query::parse("zzz");
        let matches = engine.search(MatchStrategy::All, &query);
        let text = render(|out| {
            print_matches(out, MatchStrategy::All, &query, &matches, OutputFormat::Plain)
        });
        assert_eq!(text, "No matching people found.\n");
    }

    #[test]
    fn test_json_matches() {
        let engine = engine();
        let query = Query::parse("Carol");
        let matches = engine.search(MatchStrategy::All, &query);
        let text = render(|out| {
            print_matches(out, MatchStrategy::All, &query, &matches, OutputFormat::Json)
        });

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["strategy"], "ALL");
        assert_eq!(value["query"], "carol");
        assert_eq!(value["count"], 1);
        assert_eq!(value["matches"][0]["position"], 2);
        assert_eq!(value["matches"][0]["text"], "Carol White");
    }

    #[test]
    fn test_records() {
        let engine = engine();
        let plain = render(|out| print_records(out, engine.records(), OutputFormat::Plain));
        assert_eq!(
            plain,
            "=== List of people ===\nAnn Smith\nBob Ann Jones\nCarol White\n"
        );

        let json = render(|out| print_records(out, engine.records(), OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["records"][1]["text"], "Bob Ann Jones");
    }
}
