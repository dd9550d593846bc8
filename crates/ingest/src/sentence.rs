use regex::Regex;
use std::sync::LazyLock;

/// Latin and East-Asian terminal punctuation, with any trailing whitespace
static SENTENCE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.?!。？！]\s*").expect("sentence boundary pattern is valid"));

/// Splits text into sentence-like units at terminal punctuation.
///
/// No abbreviation handling is attempted: "Mr. Darcy" is two units. Empty
/// and whitespace-only units are yielded as-is; filtering them is up to the
/// caller.
pub fn split_sentences(text: &str) -> Sentences<'_> {
    Sentences {
        boundary: &SENTENCE_BOUNDARY,
        text,
        pos: 0,
        done: false,
    }
}

/// Lazy sentence iterator borrowing its input. `Clone` restarts from the
/// current position.
#[derive(Debug, Clone)]
pub struct Sentences<'a> {
    boundary: &'static Regex,
    text: &'a str,
    pos: usize,
    done: bool,
}

impl<'a> Iterator for Sentences<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.boundary.find_at(self.text, self.pos) {
            Some(m) => {
                let sentence = &self.text[self.pos..m.start()];
                self.pos = m.end();
                Some(sentence)
            }
            None => {
                // Trailing fragment after the last boundary, possibly empty
                self.done = true;
                Some(&self.text[self.pos..])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latin_punctuation() {
        let sentences: Vec<_> = split_sentences("A loves B. Does C? Yes!").collect();
        assert_eq!(sentences, vec!["A loves B", "Does C", "Yes", ""]);
    }

    #[test]
    fn test_east_asian_punctuation() {
        let sentences: Vec<_> = split_sentences("春が来た。本当？はい！終わり").collect();
        assert_eq!(sentences, vec!["春が来た", "本当", "はい", "終わり"]);
    }

    #[test]
    fn test_consumes_trailing_whitespace() {
        let sentences: Vec<_> = split_sentences("One.\n\n  Two.   Three").collect();
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_consecutive_boundaries_yield_empty_units() {
        let sentences: Vec<_> = split_sentences("Wait... what").collect();
        assert_eq!(sentences, vec!["Wait", "", "", "what"]);
    }

    #[test]
    fn test_no_abbreviation_handling() {
        let sentences: Vec<_> = split_sentences("Mr. Darcy smiled").collect();
        assert_eq!(sentences, vec!["Mr", "Darcy smiled"]);
    }

    #[test]
    fn test_empty_text() {
        let sentences: Vec<_> = split_sentences("").collect();
        assert_eq!(sentences, vec![""]);
    }

    #[test]
    fn test_restartable() {
        let sentences = split_sentences("a. b. c");
        assert_eq!(sentences.clone().count(), 3);
        assert_eq!(sentences.collect::<Vec<_>>(), vec!["a", "b", "c"]);
    }
}
