use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

pub struct FileReader;

impl FileReader {
    /// Reads a plain-text document (`.txt` or `.md`)
    pub async fn read_file(path: &Path) -> Result<String> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");

        match extension {
            "txt" | "md" => {
                let content = fs::read_to_string(path)
                    .await
                    .context(format!("Failed to read file: {:?}", path))?;
                Ok(content)
            }
            _ => anyhow::bail!("Unsupported file format: {}", extension),
        }
    }

    /// Reads a character roster: one name per line, blank lines dropped
    pub async fn read_roster(path: &Path) -> Result<Vec<String>> {
        let content = fs::read_to_string(path)
            .await
            .context(format!("Failed to read roster: {:?}", path))?;

        Ok(parse_roster(&content))
    }
}

pub fn parse_roster(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
