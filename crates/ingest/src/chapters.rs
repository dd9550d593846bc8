use crate::chunk::Chapter;
use anyhow::{Context, Result};
use regex::Regex;
use tracing::warn;

/// Matches "Letter N" and "Chapter N" markers
pub const DEFAULT_CHAPTER_PATTERN: &str = r"(Letter \d+|Chapter \d+)";

/// Title used when the document has no chapter markers
pub const WHOLE_DOCUMENT_TITLE: &str = "Full Text";

/// Locates chapter markers and pairs each marker with the text that follows it.
#[derive(Debug, Clone)]
pub struct ChapterSplitter {
    pattern: Regex,
}

impl ChapterSplitter {
    pub fn new(pattern: &str) -> Result<Self> {
        let pattern = Regex::new(pattern)
            .with_context(|| format!("Invalid chapter pattern: {}", pattern))?;
        Ok(Self { pattern })
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Number of chapter markers in `text`
    pub fn count_markers(&self, text: &str) -> usize {
        self.pattern.find_iter(text).count()
    }

    /// Splits `text` into chapters.
    ///
    /// All matching happens here, before the first chapter is yielded; the
    /// returned stream only pairs up precomputed titles and segments. Text
    /// before the first marker is discarded.
    pub fn split<'a>(&self, text: &'a str) -> ChapterStream<'a> {
        let mut titles = Vec::new();
        let mut segments = Vec::new();
        let mut last = 0;

        for caps in self.pattern.captures_iter(text) {
            let Some(whole) = caps.get(0) else { continue };
            titles.push(self.title_of(&caps, text, whole.range()));
            segments.push(&text[last..whole.start()]);
            last = whole.end();
        }
        segments.push(&text[last..]);

        if segments.len() <= 1 {
            warn!(
                pattern = self.pattern.as_str(),
                "No chapter markers found, treating the whole text as one chapter"
            );
            return ChapterStream {
                titles: Vec::new(),
                segments: Vec::new(),
                next: 1,
                end: 1,
                whole: Some(text),
            };
        }

        let end = segments.len().min(titles.len() + 1);
        ChapterStream {
            titles,
            segments,
            next: 1,
            end,
            whole: None,
        }
    }

    // A single capture group names the chapter; otherwise the full match does.
    fn title_of<'a>(
        &self,
        caps: &regex::Captures<'a>,
        text: &'a str,
        whole: std::ops::Range<usize>,
    ) -> &'a str {
        if self.pattern.captures_len() == 2 {
            caps.get(1).map(|g| g.as_str()).unwrap_or("")
        } else {
            &text[whole]
        }
    }
}

impl Default for ChapterSplitter {
    fn default() -> Self {
        Self {
            pattern: Regex::new(DEFAULT_CHAPTER_PATTERN).expect("default chapter pattern is valid"),
        }
    }
}

/// Single-pass stream of chapters in document order.
///
/// Deliberately not `Clone`: re-splitting means calling
/// [`ChapterSplitter::split`] again.
#[derive(Debug)]
pub struct ChapterStream<'a> {
    titles: Vec<&'a str>,
    segments: Vec<&'a str>,
    next: usize,
    end: usize,
    whole: Option<&'a str>,
}

impl<'a> ChapterStream<'a> {
    /// Number of chapters left to yield, at most
    pub fn remaining(&self) -> usize {
        if self.whole.is_some() {
            1
        } else {
            self.end.saturating_sub(self.next)
        }
    }
}

impl<'a> Iterator for ChapterStream<'a> {
    type Item = Chapter<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(text) = self.whole.take() {
            return Some(Chapter::new(WHOLE_DOCUMENT_TITLE, text));
        }

        while self.next < self.end {
            let i = self.next;
            self.next += 1;

            match (self.titles.get(i - 1), self.segments.get(i)) {
                (Some(&title), Some(&body)) => return Some(Chapter::new(title, body.trim())),
                _ => {
                    warn!(
                        index = i,
                        segments = self.segments.len(),
                        titles = self.titles.len(),
                        "Chapter title/segment mismatch, skipping"
                    );
                }
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining()))
    }
}
