use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("invalid chapter pattern {pattern:?}")]
    ChapterPattern {
        pattern: String,
        #[source]
        source: BoxError,
    },

    #[error("chunk size must be at least 1 character")]
    ZeroChunkSize,

    #[error("failed to compile roster or lexicon patterns")]
    Pattern(#[source] BoxError),
}

impl AnalysisError {
    pub(crate) fn chapter_pattern(pattern: &str, source: anyhow::Error) -> Self {
        Self::ChapterPattern {
            pattern: pattern.to_string(),
            source: source.into(),
        }
    }

    pub(crate) fn pattern(source: anyhow::Error) -> Self {
        Self::Pattern(source.into())
    }
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
