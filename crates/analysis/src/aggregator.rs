use crate::tally::{OrderedMap, Tally};
use extract::Relation;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Chapter title -> attitude -> number of relations
pub type ChapterEmotions = OrderedMap<String, Tally<String>>;

/// Representative attitude for one (from, to) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryRelation {
    pub from: String,
    pub to: String,
    pub attitude: String,
    pub count: usize,
}

/// Accumulates relations chapter by chapter for one analysis run.
#[derive(Debug, Default)]
pub struct Aggregator {
    relations: Vec<Relation>,
    chapter_emotions: ChapterEmotions,
    pair_attitudes: OrderedMap<(String, String), Tally<String>>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a chapter so it appears in the histogram even with no relations
    pub fn begin_chapter(&mut self, title: &str) {
        self.chapter_emotions.entry_or_default(&title.to_string());
    }

    /// Records one chapter's relations, in order
    pub fn add_chapter(&mut self, title: &str, relations: Vec<Relation>) {
        let histogram = self.chapter_emotions.entry_or_default(&title.to_string());
        for r in &relations {
            histogram.add(&r.attitude);
            self.pair_attitudes
                .entry_or_default(&(r.from.clone(), r.to.clone()))
                .add(&r.attitude);
        }
        debug!(chapter = title, relations = relations.len(), "Aggregated chapter");
        self.relations.extend(relations);
    }

    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    pub fn relations(&self) -> &[Relation] {
        &self.relations
    }

    pub fn chapter_emotions(&self) -> &ChapterEmotions {
        &self.chapter_emotions
    }

    /// Most frequent attitude per (from, to) pair, in first-seen pair order
    pub fn summarize(&self) -> Vec<SummaryRelation> {
        self.pair_attitudes
            .iter()
            .filter_map(|((from, to), attitudes)| {
                attitudes.most_common().map(|(attitude, count)| SummaryRelation {
                    from: from.clone(),
                    to: to.clone(),
                    attitude: attitude.clone(),
                    count,
                })
            })
            .collect()
    }

    /// Consumes the aggregator into raw relations, histogram and summary
    pub fn finish(self) -> (Vec<Relation>, ChapterEmotions, Vec<SummaryRelation>) {
        let summary = self.summarize();
        (self.relations, self.chapter_emotions, summary)
    }
}
