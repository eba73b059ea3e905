use std::sync::Arc;

use crate::vocabulary::{Vocabulary, PAD_INDEX};

/// Default encoded sequence length, matching the reference model's input.
pub const DEFAULT_MAX_LENGTH: usize = 80;

/// Fixed-length integer encoding of a text, ready for model input.
///
/// Invariant: the sequence always holds exactly `max_length` entries, produced
/// by truncation or right-padding with [`PAD_INDEX`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenSequence {
    ids: Vec<u32>,
}

impl TokenSequence {
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Count of non-padding entries. Unknown-word entries count as used.
    pub fn tokens_used(&self) -> usize {
        self.ids.iter().filter(|&&id| id != PAD_INDEX).count()
    }
}

/// Normalizes raw text for tokenization: lowercase, keep only ASCII letters
/// and whitespace, collapse whitespace runs, trim. Idempotent.
pub fn normalize(text: &str) -> String {
    let kept: String = text
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_whitespace())
        .collect();
    kept.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Deterministic word tokenizer over a static vocabulary.
///
/// Tokenization is a pure function of the input text: no I/O, no hidden
/// state, and no failure mode for any string input. Text that normalizes to
/// empty encodes to an all-padding sequence; rejecting blank raw input is the
/// caller's precondition, not the tokenizer's.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    vocabulary: Arc<Vocabulary>,
    max_length: usize,
}

impl Tokenizer {
    pub fn new(vocabulary: Arc<Vocabulary>, max_length: usize) -> Self {
        Self {
            vocabulary,
            max_length,
        }
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Encodes `text` into exactly `max_length` token indices: normalize,
    /// split on whitespace, map through the vocabulary (unknown words map to
    /// the reserved unknown index), truncate, right-pad.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        let normalized = normalize(text);
        let mut ids: Vec<u32> = normalized
            .split_whitespace()
            .take(self.max_length)
            .map(|word| self.vocabulary.index_of(word))
            .collect();
        ids.resize(self.max_length, PAD_INDEX);
        TokenSequence { ids }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary::UNK_INDEX;

    fn tokenizer() -> Tokenizer {
        Tokenizer::new(Vocabulary::builtin(), DEFAULT_MAX_LENGTH)
    }

    #[test]
    fn sequences_are_always_max_length() {
        let tok = tokenizer();
        for text in ["", "happy", "one two three", &"word ".repeat(500)] {
            assert_eq!(tok.tokenize(text).len(), DEFAULT_MAX_LENGTH);
        }
    }

    #[test]
    fn normalize_strips_digits_and_punctuation() {
        assert_eq!(normalize("I'm SO happy!!! 123"), "im so happy");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("  Mixed   CASE, with 42 numbers.  ");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn known_word_is_followed_by_padding() {
        let tok = tokenizer();
        let sequence = tok.tokenize("happy");
        let idx = tok.vocabulary().index_of("happy");
        assert_eq!(sequence.ids()[0], idx);
        assert!(sequence.ids()[1..].iter().all(|&id| id == 0));
        assert_eq!(sequence.tokens_used(), 1);
    }

    #[test]
    fn unknown_word_maps_to_reserved_index() {
        let tok = tokenizer();
        let sequence = tok.tokenize("xyzzy");
        assert_eq!(sequence.ids()[0], UNK_INDEX);
        assert!(sequence.ids()[1..].iter().all(|&id| id == 0));
    }

    #[test]
    fn long_text_is_truncated() {
        let tok = tokenizer();
        let text = "happy ".repeat(DEFAULT_MAX_LENGTH * 2);
        let sequence = tok.tokenize(&text);
        assert_eq!(sequence.len(), DEFAULT_MAX_LENGTH);
        assert_eq!(sequence.tokens_used(), DEFAULT_MAX_LENGTH);
    }

    #[test]
    fn text_normalizing_to_empty_is_pure_padding() {
        let tok = tokenizer();
        for text in ["", "   ", "12345", "!?%&"] {
            let sequence = tok.tokenize(text);
            assert_eq!(sequence.tokens_used(), 0);
            assert!(sequence.ids().iter().all(|&id| id == 0));
        }
    }

    #[test]
    fn custom_max_length_is_honored() {
        let tok = Tokenizer::new(Vocabulary::builtin(), 4);
        let sequence = tok.tokenize("i am very happy today indeed");
        assert_eq!(sequence.len(), 4);
        assert_eq!(sequence.tokens_used(), 4);
    }
}
