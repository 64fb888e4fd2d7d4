//! Fixed word pool and the user-toggled subset used for selection-only generation

use crate::io::error::{PoetryError, Result};
use serde::{Deserialize, Serialize};

/// Words available to every combination
pub const DEFAULT_WORDS: [&str; 20] = [
    "Je",
    "suis",
    "rêveur",
    "professionnel",
    "dans",
    "mon",
    "métier",
    "exceptionnel",
    "l'erreur",
    "en",
    "tout",
    "genre",
    "est",
    "proscrite",
    "la",
    "souveraine",
    "intelligence",
    "pour",
    "moi-même",
    "grandissant",
];

/// Ordered, immutable pool of candidate words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Vec<String>,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}

impl Vocabulary {
    /// Build a vocabulary from any list of words, keeping their order
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    /// Words in vocabulary order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Number of words
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the vocabulary is empty
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Whether `word` belongs to the vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

/// Active subset of the vocabulary
///
/// Deactivating a word removes it; reactivating appends it at the end, so the
/// order reflects the toggle history rather than vocabulary order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet {
    active: Vec<String>,
}

impl SelectionSet {
    /// Selection with every vocabulary word active
    pub fn full(vocabulary: &Vocabulary) -> Self {
        Self {
            active: vocabulary.words().to_vec(),
        }
    }

    /// Active words in selection order
    pub fn words(&self) -> &[String] {
        &self.active
    }

    /// Number of active words
    pub const fn len(&self) -> usize {
        self.active.len()
    }

    /// Whether no word is active
    pub const fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Whether `word` is currently active
    pub fn is_active(&self, word: &str) -> bool {
        self.active.iter().any(|w| w == word)
    }

    /// Flip the state of a vocabulary word, returning whether it is now active
    ///
    /// # Errors
    ///
    /// Returns `UnknownWord` if the word is not part of the vocabulary
    pub fn toggle(&mut self, vocabulary: &Vocabulary, word: &str) -> Result<bool> {
        if !vocabulary.contains(word) {
            return Err(PoetryError::UnknownWord {
                word: word.to_owned(),
            });
        }

        if let Some(index) = self.active.iter().position(|w| w == word) {
            self.active.remove(index);
            Ok(false)
        } else {
            self.active.push(word.to_owned());
            Ok(true)
        }
    }

    /// Reactivate every vocabulary word
    pub fn reset(&mut self, vocabulary: &Vocabulary) {
        self.active = vocabulary.words().to_vec();
    }

    /// Drop words that are not part of `vocabulary` and duplicates
    ///
    /// Used when a persisted selection is loaded against the current vocabulary.
    pub fn retain_known(&mut self, vocabulary: &Vocabulary) {
        let mut seen: Vec<String> = Vec::with_capacity(self.active.len());
        self.active.retain(|word| {
            if vocabulary.contains(word) && !seen.contains(word) {
                seen.push(word.clone());
                true
            } else {
                false
            }
        });
    }
}
