use crate::chunk::Chunk;

/// Default maximum chunk size, in characters
pub const DEFAULT_CHUNK_SIZE: usize = 100_000;

#[derive(Debug, Clone, Copy)]
pub struct ChunkerConfig {
    pub max_chunk_chars: usize,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: DEFAULT_CHUNK_SIZE,
        }
    }
}

/// Splits text into fixed-size character windows.
///
/// Slicing is blind to sentence and word boundaries: a sentence may straddle
/// two chunks, and co-occurrences across that split are not seen by callers
/// that scan chunk by chunk.
#[derive(Debug, Clone, Copy)]
pub struct Chunker {
    config: ChunkerConfig,
}

impl Chunker {
    /// `max_chunk_chars` must be non-zero; a zero size is clamped to 1.
    pub fn new(config: ChunkerConfig) -> Self {
        Self {
            config: ChunkerConfig {
                max_chunk_chars: config.max_chunk_chars.max(1),
            },
        }
    }

    pub fn max_chunk_chars(&self) -> usize {
        self.config.max_chunk_chars
    }

    /// Lazily yields chunks covering `text` exactly once, in order.
    /// The returned iterator is `Clone`, so the sequence can be restarted.
    pub fn chunk_text<'a>(&self, text: &'a str) -> Chunks<'a> {
        Chunks {
            text,
            max_chars: self.config.max_chunk_chars,
            pos: 0,
            index: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chunks<'a> {
    text: &'a str,
    max_chars: usize,
    pos: usize,
    index: usize,
}

impl<'a> Iterator for Chunks<'a> {
    type Item = Chunk<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.text.len() {
            return None;
        }

        let rest = &self.text[self.pos..];
        // Byte offset of the char just past the window, or end of text
        let len = rest
            .char_indices()
            .nth(self.max_chars)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());

        let start = self.pos;
        self.pos += len;
        let chunk = Chunk {
            index: self.index,
            text: &rest[..len],
            offset: (start, self.pos),
        };
        self.index += 1;
        Some(chunk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chunker(size: usize) -> Chunker {
        Chunker::new(ChunkerConfig {
            max_chunk_chars: size,
        })
    }

    #[test]
    fn test_basic_chunking() {
        let chunks: Vec<_> = chunker(4).chunk_text("abcdefghij").collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "abcd");
        assert_eq!(chunks[1].text, "efgh");
        assert_eq!(chunks[2].text, "ij");
        assert_eq!(chunks[2].index, 2);
        assert_eq!(chunks[2].offset, (8, 10));
    }

    #[test]
    fn test_chunks_cover_input_exactly() {
        let text = "Elizabeth walked. Darcy followed, saying nothing at all.";
        let joined: String = chunker(7).chunk_text(text).map(|c| c.text).collect();
        assert_eq!(joined, text);
    }

    #[test]
    fn test_multibyte_boundaries() {
        let text = "가나다라마바사";
        let chunks: Vec<_> = chunker(3).chunk_text(text).collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].text, "가나다");
        assert_eq!(chunks[2].text, "사");
        assert!(chunks.iter().all(|c| c.char_len() <= 3));
    }

    #[test]
    fn test_empty_text_yields_nothing() {
        assert_eq!(chunker(10).chunk_text("").count(), 0);
    }

    #[test]
    fn test_small_text_is_single_chunk() {
        let chunks: Vec<_> = Chunker::new(ChunkerConfig::default())
            .chunk_text("short")
            .collect();
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].text, "short");
    }

    #[test]
    fn test_restartable() {
        let chunks = chunker(2).chunk_text("abcde");
        let first: Vec<_> = chunks.clone().collect();
        let second: Vec<_> = chunks.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_size_is_clamped() {
        assert_eq!(chunker(0).max_chunk_chars(), 1);
        assert_eq!(chunker(0).chunk_text("abc").count(), 3);
    }
}
