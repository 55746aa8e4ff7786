//! Loading captured exchanges from disk

use crate::error::{CliError, Result, ResultExt};
use exchange_lens::{Category, Exchange};
use std::fs;
use std::path::Path;

/// Read a capture file.
///
/// Accepts either a JSON array of exchange records or one record per line
/// (blank lines are skipped).
pub fn load_exchanges<P: AsRef<Path>>(path: P) -> Result<Vec<Exchange>> {
    let path_ref = path.as_ref();
    let content = fs::read_to_string(path_ref)
        .with_context(|| format!("Reading {}", path_ref.display()))?;

    let exchanges = parse_exchanges(&content)
        .with_context(|| format!("Parsing {}", path_ref.display()))?;

    tracing::debug!(
        path = %path_ref.display(),
        count = exchanges.len(),
        "loaded capture file"
    );
    Ok(exchanges)
}

/// Parse capture text in either supported layout
pub fn parse_exchanges(content: &str) -> Result<Vec<Exchange>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(index, line)| {
            serde_json::from_str::<Exchange>(line)
                .map_err(CliError::from)
                .map_err(|err| err.with_context(format!("line {}", index + 1)))
        })
        .collect()
}

/// Parse a comma-separated category filter such as `js,css`
pub fn parse_category_filter(filter: &str) -> Result<Vec<Category>> {
    filter
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| label.parse::<Category>().map_err(CliError::from))
        .collect()
}
