use std::path::Path;

use anyhow::{Context, Result};
use linesearch::{Dataset, Engine, SearchConfig};

/// Read the configuration, falling back to defaults when no file is given.
pub fn load_config(config_path: Option<&Path>) -> Result<SearchConfig> {
    match config_path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

/// Load the dataset and build the engine.
pub fn open_engine(data_path: &Path, config_path: Option<&Path>) -> Result<Engine> {
    let config = load_config(config_path)?;
    let dataset = Dataset::open(data_path)
        .with_context(|| format!("Failed to load dataset {}", data_path.display()))?;
    let engine = Engine::new(dataset, config).context("Failed to build index")?;
    Ok(engine)
}
