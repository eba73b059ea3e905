use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use std::sync::Arc;

use lazy_static::lazy_static;
use log::info;

use crate::classifier::ClassifierError;

/// Index reserved for sequence padding.
pub const PAD_INDEX: u32 = 0;
/// Index reserved for words absent from the vocabulary.
pub const UNK_INDEX: u32 = 1;

const FIRST_WORD_INDEX: u32 = 2;

/// Reference word table for emotion detection. A trained model normally ships
/// its own `vocab.json`; this table keeps the classifier usable without one.
static BUILTIN_WORDS: &[&str] = &[
    // Common words
    "i", "you", "he", "she", "it", "we", "they",
    "am", "is", "are", "was", "were", "be", "been", "being",
    "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must",
    "can", "cannot", "cant",
    "the", "a", "an", "and", "or", "but", "if", "then",
    "not", "no", "yes",
    // Emotion-related words
    "happy", "sad", "angry", "fear", "scared", "afraid",
    "joy", "joyful", "excited",
    "upset", "frustrated", "annoyed", "mad",
    "love", "hate", "like", "dislike",
    "good", "bad", "great", "terrible", "awful",
    "feel", "feeling", "felt",
    "very", "really", "so", "too", "much",
    "sorry", "please", "thank", "thanks",
    "help", "need", "want", "wish",
    "think", "thought", "know", "believe",
    "see", "look", "hear", "listen",
    "go", "come", "get", "make", "take",
    "day", "time", "way", "people", "thing",
    "work", "life", "world", "home", "friend",
    "tell", "say", "said", "ask", "asked",
    "just", "now", "today", "never", "always",
    "about", "after", "before", "because", "when", "where",
    "what", "why", "how", "who", "which",
];

lazy_static! {
    static ref BUILTIN: Arc<Vocabulary> =
        Arc::new(Vocabulary::from_words(BUILTIN_WORDS.iter().copied()));
}

/// Immutable mapping from normalized words to token indices.
///
/// Indices 0 and 1 are reserved ([`PAD_INDEX`] and [`UNK_INDEX`]); every word
/// maps to an index of 2 or greater. Built once, never mutated afterward.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    word_index: HashMap<String, u32>,
}

impl Vocabulary {
    /// Shared instance of the built-in reference vocabulary.
    pub fn builtin() -> Arc<Vocabulary> {
        Arc::clone(&BUILTIN)
    }

    /// Builds a vocabulary from an ordered word list, assigning indices from 2
    /// upward. Repeated words keep their first index.
    pub fn from_words<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut word_index = HashMap::new();
        let mut next = FIRST_WORD_INDEX;
        for word in words {
            if let Entry::Vacant(slot) = word_index.entry(word.into()) {
                slot.insert(next);
                next += 1;
            }
        }
        Self { word_index }
    }

    /// Loads a vocabulary from a JSON file mapping words to indices, the
    /// format exported by the model training pipeline. Marker entries for the
    /// reserved indices (`<PAD>`, `<UNK>`) are skipped.
    pub fn from_file(path: &Path) -> Result<Self, ClassifierError> {
        let contents = fs::read_to_string(path).map_err(|e| {
            ClassifierError::Config(format!(
                "failed to read vocabulary file {}: {}",
                path.display(),
                e
            ))
        })?;
        let raw: HashMap<String, u32> = serde_json::from_str(&contents).map_err(|e| {
            ClassifierError::Config(format!(
                "failed to parse vocabulary file {}: {}",
                path.display(),
                e
            ))
        })?;

        let mut word_index = HashMap::new();
        let mut seen = HashSet::new();
        for (word, index) in raw {
            if word == "<PAD>" || word == "<UNK>" {
                continue;
            }
            if index < FIRST_WORD_INDEX {
                return Err(ClassifierError::Config(format!(
                    "word '{}' uses reserved index {}",
                    word, index
                )));
            }
            if !seen.insert(index) {
                return Err(ClassifierError::Config(format!(
                    "index {} is assigned to more than one word",
                    index
                )));
            }
            word_index.insert(word, index);
        }
        if word_index.is_empty() {
            return Err(ClassifierError::Config(format!(
                "vocabulary file {} contains no words",
                path.display()
            )));
        }

        info!(
            "Loaded vocabulary with {} words from {}",
            word_index.len(),
            path.display()
        );
        Ok(Self { word_index })
    }

    /// Index for `word`, or [`UNK_INDEX`] if it is not in the vocabulary.
    pub fn index_of(&self, word: &str) -> u32 {
        self.word_index.get(word).copied().unwrap_or(UNK_INDEX)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.word_index.contains_key(word)
    }

    /// Number of words, excluding the two reserved indices.
    pub fn len(&self) -> usize {
        self.word_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.word_index.is_empty()
    }
}
