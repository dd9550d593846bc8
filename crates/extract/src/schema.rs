use serde::{Deserialize, Serialize};

/// Two-class sentiment lexicon. Polarity is kept for input only; extraction
/// treats every term as an opaque attitude label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    #[serde(default)]
    pub positive: Vec<String>,
    #[serde(default)]
    pub negative: Vec<String>,
}

impl Lexicon {
    pub fn new(positive: Vec<String>, negative: Vec<String>) -> Self {
        Self { positive, negative }
    }

    /// Positive terms followed by negative terms
    pub fn terms(&self) -> Vec<String> {
        self.positive
            .iter()
            .chain(self.negative.iter())
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.positive.len() + self.negative.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One observed (source, target, attitude) edge, with the sentence it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relation {
    pub from: String,
    pub to: String,
    pub attitude: String,
    pub sentence: String,
    pub chapter: String,
}
