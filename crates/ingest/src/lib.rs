pub mod chapters;
pub mod chunk;
pub mod chunker;
pub mod reader;
pub mod sentence;

pub use chapters::{ChapterSplitter, ChapterStream, DEFAULT_CHAPTER_PATTERN, WHOLE_DOCUMENT_TITLE};
pub use chunk::{Chapter, Chunk};
pub use chunker::{Chunker, ChunkerConfig, Chunks, DEFAULT_CHUNK_SIZE};
pub use reader::FileReader;
pub use sentence::{Sentences, split_sentences};
