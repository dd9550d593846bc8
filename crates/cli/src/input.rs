use analysis::{AnalysisConfig, Lexicon};
use anyhow::{Context, Result};
use ingest::FileReader;
use std::path::Path;
use tokio::fs;

/// Everything `run_analysis` needs, loaded from disk
pub struct Inputs {
    pub text: String,
    pub characters: Vec<String>,
    pub lexicon: Lexicon,
}

impl Inputs {
    pub async fn load(text: &Path, characters: &Path, lexicon: &Path) -> Result<Self> {
        let text = FileReader::read_file(text).await?;
        let characters = FileReader::read_roster(characters).await?;
        let lexicon = load_lexicon(lexicon).await?;

        Ok(Self {
            text,
            characters,
            lexicon,
        })
    }
}

/// Reads a `{"positive": [...], "negative": [...]}` lexicon
pub async fn load_lexicon(path: &Path) -> Result<Lexicon> {
    let content = fs::read_to_string(path)
        .await
        .context(format!("Failed to read lexicon: {:?}", path))?;

    serde_json::from_str(&content).context(format!("Failed to parse lexicon: {:?}", path))
}

/// Reads an analysis config from TOML, or the defaults when no path is given
pub async fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };

    let content = fs::read_to_string(path)
        .await
        .context(format!("Failed to read config: {:?}", path))?;

    toml::from_str(&content).context(format!("Failed to parse config: {:?}", path))
}
