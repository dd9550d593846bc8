pub mod patterns;
pub mod schema;

pub use patterns::{PatternSet, WordPattern};
pub use schema::{Lexicon, Relation};

use anyhow::Result;
use ingest::{Chunk, split_sentences};

/// Sentence-level co-occurrence extractor.
///
/// For each sentence naming two or more roster entities, every lexicon term
/// in that sentence yields one relation from the first entity (in roster
/// order) to each of the others.
pub struct Extractor {
    patterns: PatternSet,
}

impl Extractor {
    pub fn new(patterns: PatternSet) -> Self {
        Self { patterns }
    }

    /// Compile patterns for a roster and a flat term list
    pub fn compile<S: AsRef<str>>(roster: &[S], terms: &[S]) -> Result<Self> {
        Ok(Self::new(PatternSet::compile(roster, terms)?))
    }

    pub fn patterns(&self) -> &PatternSet {
        &self.patterns
    }

    /// Extract relations from a block of text belonging to `chapter`
    pub fn extract_from_text(&self, text: &str, chapter: &str) -> Vec<Relation> {
        let mut relations = Vec::new();
        self.extract_into(text, chapter, &mut relations);
        relations
    }

    /// Extract from a chunk of a chapter body
    pub fn extract_chunk(&self, chunk: &Chunk<'_>, chapter: &str) -> Vec<Relation> {
        self.extract_from_text(chunk.text, chapter)
    }

    /// Appends relations found in `text` to `out`, in sentence order
    pub fn extract_into(&self, text: &str, chapter: &str, out: &mut Vec<Relation>) {
        for sentence in split_sentences(text) {
            let sentence = sentence.trim();
            if sentence.is_empty() {
                continue;
            }

            let present = self.patterns.entities_in(sentence);
            let Some((&source, targets)) = present.split_first() else {
                continue;
            };
            if targets.is_empty() {
                continue;
            }

            for attitude in self.patterns.terms_in(sentence) {
                for &target in targets {
                    out.push(Relation {
                        from: source.to_string(),
                        to: target.to_string(),
                        attitude: attitude.to_string(),
                        sentence: sentence.to_string(),
                        chapter: chapter.to_string(),
                    });
                }
            }
        }
    }
}
