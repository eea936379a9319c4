use crate::types::{MatchedEntry, Result};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes the aggregated results as a pretty-printed JSON array named after
/// today's date, creating the output directory if needed. Returns the path
/// of the written file.
pub fn export(output_dir: &Path, entries: &[MatchedEntry]) -> Result<PathBuf> {
    fs::create_dir_all(output_dir)?;

    let file_name = format!("{}-news.json", Local::now().format("%Y-%m-%d"));
    let path = output_dir.join(file_name);

    let json = serde_json::to_string_pretty(entries)?;
    fs::write(&path, json)?;

    info!("Wrote {} entries to {}", entries.len(), path.display());
    Ok(path)
}
