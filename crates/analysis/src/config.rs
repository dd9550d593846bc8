use crate::error::{AnalysisError, Result};
use ingest::{ChapterSplitter, DEFAULT_CHAPTER_PATTERN, DEFAULT_CHUNK_SIZE};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Regex locating chapter markers. A single capture group, if present,
    /// becomes the chapter title.
    pub chapter_pattern: String,
    /// Maximum characters scanned at once within a chapter
    pub chunk_size: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            chapter_pattern: DEFAULT_CHAPTER_PATTERN.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl AnalysisConfig {
    pub fn with_chapter_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.chapter_pattern = pattern.into();
        self
    }

    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.chapter_splitter()?;
        if self.chunk_size == 0 {
            return Err(AnalysisError::ZeroChunkSize);
        }
        Ok(())
    }

    pub(crate) fn chapter_splitter(&self) -> Result<ChapterSplitter> {
        ChapterSplitter::new(&self.chapter_pattern)
            .map_err(|e| AnalysisError::chapter_pattern(&self.chapter_pattern, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AnalysisConfig::default();
        assert_eq!(config.chapter_pattern, r"(Letter \d+|Chapter \d+)");
        assert_eq!(config.chunk_size, 100_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: AnalysisConfig = serde_json::from_str(r#"{"chunk_size": 500}"#).unwrap();
        assert_eq!(config.chunk_size, 500);
        assert_eq!(config.chapter_pattern, DEFAULT_CHAPTER_PATTERN);
    }

    #[test]
    fn test_rejects_zero_chunk_size() {
        let config = AnalysisConfig::default().with_chunk_size(0);
        assert!(matches!(config.validate(), Err(AnalysisError::ZeroChunkSize)));
    }

    #[test]
    fn test_rejects_bad_pattern() {
        let config = AnalysisConfig::default().with_chapter_pattern("Chapter (");
        match config.validate() {
            Err(AnalysisError::ChapterPattern { pattern, .. }) => assert_eq!(pattern, "Chapter ("),
            other => panic!("expected pattern error, got {:?}", other),
        }
    }
}
