pub mod aggregator;
pub mod config;
pub mod error;
pub mod progress;
pub mod tally;

pub use aggregator::{Aggregator, ChapterEmotions, SummaryRelation};
pub use config::AnalysisConfig;
pub use error::{AnalysisError, Result};
pub use extract::{Lexicon, Relation};
pub use progress::{ProgressReporter, ProgressSnapshot, ProgressTracker};

use extract::Extractor;
use ingest::{Chunker, ChunkerConfig};
use serde::Serialize;
use tracing::{error, info, warn};

/// Output of one analysis run
#[derive(Debug, Serialize)]
pub struct AnalysisResult {
    pub relations: Vec<Relation>,
    pub chapter_emotions: ChapterEmotions,
    pub summary_relations: Vec<SummaryRelation>,
}

/// Extracts the character relation graph from `text`.
///
/// Chapters are processed in document order; `progress`, if given, is called
/// once per finished chapter on the calling thread. Any failure aborts the
/// run and is returned after being logged.
pub fn run_analysis<S: AsRef<str>>(
    text: &str,
    roster: &[S],
    lexicon: &Lexicon,
    config: &AnalysisConfig,
    progress: Option<&mut dyn ProgressReporter>,
) -> Result<AnalysisResult> {
    info!(
        size_mb = %format!("{:.2}", text.len() as f64 / (1024.0 * 1024.0)),
        characters = roster.len(),
        terms = lexicon.len(),
        "Starting analysis"
    );

    let result = analyze(text, roster, lexicon, config, progress);
    if let Err(e) = &result {
        error!(error = %e, "Analysis failed");
    }
    result
}

fn analyze<S: AsRef<str>>(
    text: &str,
    roster: &[S],
    lexicon: &Lexicon,
    config: &AnalysisConfig,
    mut progress: Option<&mut dyn ProgressReporter>,
) -> Result<AnalysisResult> {
    config.validate()?;
    let splitter = config.chapter_splitter()?;
    let chunker = Chunker::new(ChunkerConfig {
        max_chunk_chars: config.chunk_size,
    });

    let terms = lexicon.terms();
    if terms.is_empty() {
        warn!("Emotion lexicon is empty, no relations can be found");
    }

    let roster: Vec<&str> = roster.iter().map(AsRef::as_ref).collect();
    let terms: Vec<&str> = terms.iter().map(String::as_str).collect();
    let extractor = Extractor::compile(&roster[..], &terms[..]).map_err(AnalysisError::pattern)?;

    // Denominator for progress; an unmarked document is one chapter
    let total_chapters = splitter.count_markers(text).max(1);
    let mut tracker = ProgressTracker::new(total_chapters);
    let mut aggregator = Aggregator::new();

    for chapter in splitter.split(text) {
        info!(
            chapter = chapter.title,
            size_kb = %format!("{:.1}", chapter.size_kb()),
            "Processing chapter"
        );
        aggregator.begin_chapter(chapter.title);

        let mut chapter_relations = Vec::new();
        for chunk in chunker.chunk_text(chapter.body) {
            chapter_relations.extend(extractor.extract_chunk(&chunk, chapter.title));
        }

        let found = chapter_relations.len();
        aggregator.add_chapter(chapter.title, chapter_relations);

        let snapshot = tracker.update(chapter.title, found);
        if let Some(reporter) = progress.as_deref_mut() {
            reporter.report(&snapshot);
        }
    }

    info!("Summarizing relations");
    let (relations, chapter_emotions, summary_relations) = aggregator.finish();

    info!(
        relations = relations.len(),
        summary_relations = summary_relations.len(),
        "Analysis complete"
    );

    Ok(AnalysisResult {
        relations,
        chapter_emotions,
        summary_relations,
    })
}
