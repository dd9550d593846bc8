use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

/// Case-insensitive whole-word matcher for a single name or term.
#[derive(Debug, Clone)]
pub struct WordPattern {
    word: String,
    regex: Regex,
}

impl WordPattern {
    pub fn new(word: &str) -> Result<Self> {
        let regex = RegexBuilder::new(&format!(r"\b{}\b", regex::escape(word)))
            .case_insensitive(true)
            .build()
            .with_context(|| format!("Failed to compile pattern for {:?}", word))?;

        Ok(Self {
            word: word.to_string(),
            regex,
        })
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Matchers for the whole roster and lexicon, compiled once per run.
#[derive(Debug, Clone)]
pub struct PatternSet {
    entities: Vec<WordPattern>,
    terms: Vec<WordPattern>,
}

impl PatternSet {
    /// Compiles one matcher per roster name and lexicon term, preserving order.
    pub fn compile<S: AsRef<str>>(roster: &[S], terms: &[S]) -> Result<Self> {
        let entities = roster
            .iter()
            .map(|name| WordPattern::new(name.as_ref()))
            .collect::<Result<Vec<_>>>()
            .context("Failed to compile entity patterns")?;

        let terms = terms
            .iter()
            .map(|term| WordPattern::new(term.as_ref()))
            .collect::<Result<Vec<_>>>()
            .context("Failed to compile lexicon patterns")?;

        Ok(Self { entities, terms })
    }

    pub fn entities(&self) -> &[WordPattern] {
        &self.entities
    }

    pub fn terms(&self) -> &[WordPattern] {
        &self.terms
    }

    /// Roster names found in `sentence`, in roster order
    pub fn entities_in<'p>(&'p self, sentence: &str) -> Vec<&'p str> {
        self.entities
            .iter()
            .filter(|p| p.is_match(sentence))
            .map(WordPattern::word)
            .collect()
    }

    /// Lexicon terms found in `sentence`, in lexicon order
    pub fn terms_in<'p>(&'p self, sentence: &str) -> Vec<&'p str> {
        self.terms
            .iter()
            .filter(|p| p.is_match(sentence))
            .map(WordPattern::word)
            .collect()
    }
}
