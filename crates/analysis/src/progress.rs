use serde::Serialize;
use tracing::info;

/// Cumulative progress after a chapter completes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProgressSnapshot {
    pub processed_chapters: usize,
    pub total_chapters: usize,
    pub relations_so_far: usize,
    pub current_chapter_title: String,
    pub percent: f64,
}

/// Receives one snapshot per completed chapter, synchronously.
pub trait ProgressReporter {
    fn report(&mut self, snapshot: &ProgressSnapshot);
}

impl<F> ProgressReporter for F
where
    F: FnMut(&ProgressSnapshot),
{
    fn report(&mut self, snapshot: &ProgressSnapshot) {
        self(snapshot)
    }
}

/// Tracks chapter and relation counters for a run.
#[derive(Debug, Clone)]
pub struct ProgressTracker {
    total_chapters: usize,
    processed_chapters: usize,
    relations_count: usize,
}

impl ProgressTracker {
    pub fn new(total_chapters: usize) -> Self {
        Self {
            total_chapters,
            processed_chapters: 0,
            relations_count: 0,
        }
    }

    /// Marks `chapter_title` done with `new_relations` found in it
    pub fn update(&mut self, chapter_title: &str, new_relations: usize) -> ProgressSnapshot {
        self.processed_chapters += 1;
        self.relations_count += new_relations;

        let percent = if self.total_chapters > 0 {
            self.processed_chapters as f64 / self.total_chapters as f64 * 100.0
        } else {
            0.0
        };

        info!(
            chapter = chapter_title,
            processed = self.processed_chapters,
            total = self.total_chapters,
            relations = self.relations_count,
            "Chapter done ({:.1}%)",
            percent
        );

        ProgressSnapshot {
            processed_chapters: self.processed_chapters,
            total_chapters: self.total_chapters,
            relations_so_far: self.relations_count,
            current_chapter_title: chapter_title.to_string(),
            percent,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent() {
        let mut tracker = ProgressTracker::new(4);
        let snap = tracker.update("Chapter 1", 3);
        assert_eq!(snap.percent, 25.0);
        assert_eq!(snap.relations_so_far, 3);

        let snap = tracker.update("Chapter 2", 2);
        assert_eq!(snap.processed_chapters, 2);
        assert_eq!(snap.relations_so_far, 5);
        assert_eq!(snap.percent, 50.0);
        assert_eq!(snap.current_chapter_title, "Chapter 2");
    }

    #[test]
    fn test_zero_total_is_zero_percent() {
        let mut tracker = ProgressTracker::new(0);
        assert_eq!(tracker.update("x", 1).percent, 0.0);
    }

    #[test]
    fn test_closure_reporter() {
        let mut seen = Vec::new();
        {
            let mut reporter = |s: &ProgressSnapshot| seen.push(s.processed_chapters);
            let mut tracker = ProgressTracker::new(2);
            reporter.report(&tracker.update("a", 0));
            reporter.report(&tracker.update("b", 0));
        }
        assert_eq!(seen, vec![1, 2]);
    }
}
