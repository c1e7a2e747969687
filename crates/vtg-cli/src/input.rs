use std::path::Path;

use anyhow::Context;
use serde_jsonlines::JsonLinesReader;
use vtg_core::entities::InsightItem;

/// Read insight records from a JSON array or a JSONL file.
///
/// The format is picked from the first non-blank character. Blank JSONL
/// lines are ignored.
pub fn load_items(path: &Path) -> anyhow::Result<Vec<InsightItem>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read insight file {}", path.display()))?;

    let items = if content.trim_start().starts_with('[') {
        serde_json::from_str::<Vec<InsightItem>>(&content)
            .with_context(|| format!("invalid JSON array in {}", path.display()))?
    } else {
        parse_json_lines(&content)
            .with_context(|| format!("invalid JSONL in {}", path.display()))?
    };

    tracing::debug!(count = items.len(), path = %path.display(), "loaded insight records");
    Ok(items)
}

fn parse_json_lines(content: &str) -> std::io::Result<Vec<InsightItem>> {
    let records: String = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .flat_map(|line| [line, "\n"])
        .collect();

    JsonLinesReader::new(records.as_bytes())
        .read_all::<InsightItem>()
        .collect()
}
