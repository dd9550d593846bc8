use serde::Serialize;

/// A bounded window of a chapter body. Borrows from the chapter text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chunk<'a> {
    pub index: usize,
    pub text: &'a str,
    pub offset: (usize, usize), // [start, end) byte positions in the chapter body
}

impl<'a> Chunk<'a> {
    /// Number of characters (not bytes) in this chunk
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// A titled span of the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Chapter<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

impl<'a> Chapter<'a> {
    pub fn new(title: &'a str, body: &'a str) -> Self {
        Self { title, body }
    }

    /// Body size in kilobytes, used for logging
    pub fn size_kb(&self) -> f64 {
        self.body.len() as f64 / 1024.0
    }
}
